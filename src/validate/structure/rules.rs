//! Per-element rule functions.
//!
//! Each element category gets one pure function `(element[, registry]) ->
//! Vec<Finding>`; the validator composes them into passes. Adding a new
//! element kind means adding a function here and one dispatch line in the
//! validator.
//!
//! All name comparisons use local names only.

use crate::xml::Element;

use super::types::{Finding, RuleCategory, TaskRegistry};

/// Elements allowed as direct children of `Project`.
pub const PROJECT_CHILDREN: [&str; 7] = [
    "Choose",
    "Import",
    "ItemGroup",
    "ProjectExtensions",
    "PropertyGroup",
    "Target",
    "UsingTask",
];

/// Built-in task elements allowed as direct children of `Target`.
pub const TARGET_CHILDREN: [&str; 6] = [
    "PropertyGroup",
    "ItemGroup",
    "Error",
    "Warning",
    "Message",
    "Exec",
];

/// Check the root's direct children against the `Project` allow-list.
///
/// Runs even when the root element's own name is wrong.
pub fn check_project_children(root: &Element) -> Vec<Finding> {
    let mut findings = Vec::new();

    for child in root.children() {
        if !PROJECT_CHILDREN.contains(&child.name()) {
            findings.push(Finding::new(
                RuleCategory::Root,
                child.name(),
                format!("Disallowed element <{}> found within <Project>.", child.name()),
            ));
        }
    }

    findings
}

/// Check a `Choose` element.
///
/// Children must be `When` or `Otherwise`; at most one `Otherwise`; no
/// `When` after an `Otherwise`; at least one `When` overall. The rules are
/// independent and may all fire for a single element.
pub fn check_choose(element: &Element) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut has_when = false;
    let mut found_otherwise = false;

    for child in element.children() {
        match child.name() {
            "When" => {
                has_when = true;
                if found_otherwise {
                    findings.push(Finding::new(
                        RuleCategory::Choose,
                        "When",
                        "<When> element cannot appear after an <Otherwise> element within <Choose>.",
                    ));
                }
            }
            "Otherwise" => {
                if found_otherwise {
                    findings.push(Finding::new(
                        RuleCategory::Choose,
                        "Otherwise",
                        "Only one <Otherwise> element is allowed within <Choose>.",
                    ));
                }
                found_otherwise = true;
            }
            other => {
                findings.push(Finding::new(
                    RuleCategory::Choose,
                    other,
                    format!(
                        "Disallowed element <{}> found within <Choose>. Only <When> and <Otherwise> are allowed.",
                        other
                    ),
                ));
            }
        }
    }

    if !has_when {
        findings.push(Finding::new(
            RuleCategory::Choose,
            "Choose",
            "<Choose> element must contain at least one <When> element.",
        ));
    }

    findings
}

/// Check an `Import` element: non-blank `Project` attribute, no nesting.
pub fn check_import(element: &Element) -> Vec<Finding> {
    let mut findings = Vec::new();

    if attr_is_blank(element, "Project") {
        findings.push(Finding::new(
            RuleCategory::Import,
            "Import",
            "<Import> element must have a non-empty 'Project' attribute.",
        ));
    }

    if element.has_children() {
        findings.push(Finding::new(
            RuleCategory::Import,
            "Import",
            "<Import> element must not contain nested elements.",
        ));
    }

    findings
}

/// Check an `ItemGroup` element: children must all be `Item`.
pub fn check_item_group(element: &Element) -> Vec<Finding> {
    let mut findings = Vec::new();

    for child in element.children() {
        if child.name() != "Item" {
            findings.push(Finding::new(
                RuleCategory::ItemGroup,
                child.name(),
                format!(
                    "Disallowed element <{}> found within <ItemGroup>. Only <Item> elements are allowed.",
                    child.name()
                ),
            ));
        }
    }

    findings
}

/// Check a `ProjectExtensions` element.
///
/// The "only one" rule counts direct children of THIS element that are
/// themselves named `ProjectExtensions`; it is an element-local check, not
/// a document-wide singleton check over siblings.
pub fn check_project_extensions(element: &Element) -> Vec<Finding> {
    let mut findings = Vec::new();

    if element.children_named("ProjectExtensions").count() > 1 {
        findings.push(Finding::new(
            RuleCategory::ProjectExtensions,
            "ProjectExtensions",
            "Only one <ProjectExtensions> element is allowed within <Project>.",
        ));
    }

    if element.has_children() {
        findings.push(Finding::new(
            RuleCategory::ProjectExtensions,
            "ProjectExtensions",
            "<ProjectExtensions> element must not contain nested elements.",
        ));
    }

    findings
}

/// Check a `PropertyGroup` element.
///
/// Each child is a property: it must not nest elements, and a blank value
/// is legal only when a `Condition` attribute is present.
pub fn check_property_group(element: &Element) -> Vec<Finding> {
    let mut findings = Vec::new();

    for property in element.children() {
        if property.has_children() {
            findings.push(Finding::new(
                RuleCategory::PropertyGroup,
                property.name(),
                format!(
                    "Nested elements are not allowed within property <{}> inside <PropertyGroup>.",
                    property.name()
                ),
            ));
        }

        if property.text().trim().is_empty() && property.attr("Condition").is_none() {
            findings.push(Finding::new(
                RuleCategory::PropertyGroup,
                property.name(),
                format!(
                    "Property <{}> in <PropertyGroup> is empty and should either have a non-empty value or a 'Condition' attribute.",
                    property.name()
                ),
            ));
        }
    }

    findings
}

/// Check a `UsingTask` element: non-blank `TaskName`, and at least one of
/// `AssemblyFile` / `AssemblyName` present.
pub fn check_using_task(element: &Element) -> Vec<Finding> {
    let mut findings = Vec::new();

    if attr_is_blank(element, "TaskName") {
        findings.push(Finding::new(
            RuleCategory::UsingTask,
            "UsingTask",
            "<UsingTask> element must have a non-empty 'TaskName' attribute.",
        ));
    }

    // Presence check only: a blank assembly attribute still satisfies it.
    if element.attr("AssemblyFile").is_none() && element.attr("AssemblyName").is_none() {
        findings.push(Finding::new(
            RuleCategory::UsingTask,
            "UsingTask",
            "<UsingTask> element must have either an 'AssemblyFile' or 'AssemblyName' attribute.",
        ));
    }

    findings
}

/// Register the custom task declared by a `UsingTask` element, if any.
///
/// Registration is independent of validation outcome: a `UsingTask` missing
/// its assembly attributes still registers its task name.
pub fn register_custom_task(element: &Element, registry: &mut TaskRegistry) {
    if let Some(name) = element.attr("TaskName")
        && !name.trim().is_empty()
    {
        registry.register(name);
    }
}

/// Check a `Target` element: non-blank `Name` attribute, children drawn
/// from the built-in task set or the custom task registry.
pub fn check_target(element: &Element, registry: &TaskRegistry) -> Vec<Finding> {
    let mut findings = Vec::new();

    if attr_is_blank(element, "Name") {
        findings.push(Finding::new(
            RuleCategory::Target,
            "Target",
            "<Target> element must have a non-empty 'Name' attribute.",
        ));
    }

    for child in element.children() {
        if !TARGET_CHILDREN.contains(&child.name()) && !registry.contains(child.name()) {
            findings.push(Finding::new(
                RuleCategory::Target,
                child.name(),
                format!(
                    "Disallowed element <{}> found within <Target>. Allowed elements are built-in tasks and registered custom tasks.",
                    child.name()
                ),
            ));
        }
    }

    findings
}

/// Whether an attribute is missing or blank after trimming.
fn attr_is_blank(element: &Element, name: &str) -> bool {
    element.attr(name).is_none_or(|v| v.trim().is_empty())
}
