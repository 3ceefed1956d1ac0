//! Structural validation of project documents.
//!
//! The validator walks the root's direct children with one pass per rule
//! category and accumulates findings in evaluation order. Custom task
//! discovery is a document-wide pass that runs before any `Target` is
//! judged, so a task declared after a `Target` that uses it is still
//! recognized.
//!
//! Malformed structure is never fatal: every violation is collected and the
//! full list is returned. The only special case is an absent tree, which
//! yields exactly one missing-root finding.

pub mod rules;
mod types;


pub use types::{Finding, RuleCategory, TaskRegistry};

use crate::xml::Element;

/// Toggles for the group validation passes. Both default to on; turning one
/// off skips that element kind entirely, at the root and inside `Target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureOptions {
    /// Validate `ItemGroup` elements (at the root and inside `Target`).
    pub check_item_groups: bool,
    /// Validate `PropertyGroup` elements (at the root and inside `Target`).
    pub check_property_groups: bool,
}

impl Default for StructureOptions {
    fn default() -> Self {
        Self {
            check_item_groups: true,
            check_property_groups: true,
        }
    }
}

/// Validate the structure of a project document.
///
/// Walks the tree rooted at `root` and returns every structural violation
/// in rule-evaluation order: root checks, then Choose, Import, ItemGroup,
/// ProjectExtensions, PropertyGroup, UsingTask, and Target. All state is
/// scoped to this call; validating the same tree twice yields identical
/// findings.
///
/// # Arguments
///
/// * `root` - The document's root element, or `None` for an absent tree
/// * `options` - Pass toggles (see [`StructureOptions`])
///
/// # Returns
///
/// The ordered list of findings; empty means structurally valid. An absent
/// tree yields exactly one missing-root finding, never an empty list.
pub fn validate_structure(root: Option<&Element>, options: &StructureOptions) -> Vec<Finding> {
    let Some(root) = root else {
        return vec![missing_root_finding()];
    };

    let mut findings = Vec::new();

    // Root checks: name, then the child allow-list. The child scan runs
    // even when the root's own name is wrong.
    if root.name() != "Project" {
        findings.push(missing_root_finding());
    }
    findings.extend(rules::check_project_children(root));

    // Discovery pass: collect every custom task name in the document before
    // any Target is judged. Declaration order does not matter.
    let mut registry = TaskRegistry::new();
    for using_task in root.children_named("UsingTask") {
        rules::register_custom_task(using_task, &mut registry);
    }

    for choose in root.children_named("Choose") {
        findings.extend(rules::check_choose(choose));
    }

    for import in root.children_named("Import") {
        findings.extend(rules::check_import(import));
    }

    if options.check_item_groups {
        for item_group in root.children_named("ItemGroup") {
            findings.extend(rules::check_item_group(item_group));
        }
    }

    for extensions in root.children_named("ProjectExtensions") {
        findings.extend(rules::check_project_extensions(extensions));
    }

    if options.check_property_groups {
        for property_group in root.children_named("PropertyGroup") {
            findings.extend(rules::check_property_group(property_group));
        }
    }

    for using_task in root.children_named("UsingTask") {
        findings.extend(rules::check_using_task(using_task));
    }

    for target in root.children_named("Target") {
        findings.extend(rules::check_target(target, &registry));
        findings.extend(check_target_groups(target, options));
    }

    findings
}

/// Validate group elements nested inside a `Target`.
///
/// The group rules are the same ones applied at the root level; the target
/// pass reuses them for its `ItemGroup`/`PropertyGroup` children when the
/// corresponding toggle is on.
fn check_target_groups(target: &Element, options: &StructureOptions) -> Vec<Finding> {
    let mut findings = Vec::new();

    if options.check_item_groups {
        for item_group in target.children_named("ItemGroup") {
            findings.extend(rules::check_item_group(item_group));
        }
    }

    if options.check_property_groups {
        for property_group in target.children_named("PropertyGroup") {
            findings.extend(rules::check_property_group(property_group));
        }
    }

    findings
}

fn missing_root_finding() -> Finding {
    Finding::new(
        RuleCategory::Root,
        "Project",
        "Missing or incorrect root <Project> element.",
    )
}
