//! Implementation of the `projlint rules` command.

use crate::error::Result;
use crate::validate::RuleCategory;

/// Execute the `projlint rules` command.
///
/// Lists the rule categories the checker applies, one line each.
pub fn cmd_rules() -> Result<()> {
    println!("Rule categories ({}):", CATEGORY_SUMMARIES.len());
    println!();

    for (category, summary) in CATEGORY_SUMMARIES {
        println!("  {:<20} {}", category.to_string(), summary);
    }

    Ok(())
}

const CATEGORY_SUMMARIES: [(RuleCategory, &str); 8] = [
    (
        RuleCategory::Root,
        "root element is <Project>; direct children come from the allow-list",
    ),
    (
        RuleCategory::Choose,
        "<Choose> holds <When>/<Otherwise>, at most one <Otherwise>, none before a <When>",
    ),
    (
        RuleCategory::Import,
        "<Import> carries a non-empty 'Project' attribute and no nested elements",
    ),
    (
        RuleCategory::ItemGroup,
        "<ItemGroup> children are <Item> elements",
    ),
    (
        RuleCategory::ProjectExtensions,
        "<ProjectExtensions> is empty and not nested inside itself",
    ),
    (
        RuleCategory::PropertyGroup,
        "properties do not nest elements; empty values need a 'Condition'",
    ),
    (
        RuleCategory::UsingTask,
        "<UsingTask> names a task and an 'AssemblyFile' or 'AssemblyName'",
    ),
    (
        RuleCategory::Target,
        "<Target> carries a 'Name'; children are built-in or registered custom tasks",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_command_succeeds() {
        assert!(cmd_rules().is_ok());
    }

    #[test]
    fn every_category_has_a_summary() {
        // One summary per RuleCategory variant, in evaluation order.
        let categories: Vec<RuleCategory> = CATEGORY_SUMMARIES.iter().map(|(c, _)| *c).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), CATEGORY_SUMMARIES.len());
        assert_eq!(categories, sorted);
    }
}
