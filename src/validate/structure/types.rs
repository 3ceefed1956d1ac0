//! Core types for structural validation: findings, rule categories, and the
//! custom task registry.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The rule category a finding belongs to.
///
/// Categories correspond to the element kinds the validator knows about;
/// findings are reported grouped in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Root element name and direct-child allow-list.
    Root,
    /// `Choose` / `When` / `Otherwise` ordering and arity.
    Choose,
    /// `Import` attribute and nesting rules.
    Import,
    /// `ItemGroup` child allow-list.
    ItemGroup,
    /// `ProjectExtensions` singleton and nesting rules.
    ProjectExtensions,
    /// Property nesting and empty-value rules.
    PropertyGroup,
    /// `UsingTask` required attributes.
    UsingTask,
    /// `Target` attributes and child allow-list.
    Target,
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleCategory::Root => write!(f, "root"),
            RuleCategory::Choose => write!(f, "choose"),
            RuleCategory::Import => write!(f, "import"),
            RuleCategory::ItemGroup => write!(f, "item_group"),
            RuleCategory::ProjectExtensions => write!(f, "project_extensions"),
            RuleCategory::PropertyGroup => write!(f, "property_group"),
            RuleCategory::UsingTask => write!(f, "using_task"),
            RuleCategory::Target => write!(f, "target"),
        }
    }
}

/// One reported structural violation.
///
/// Findings are immutable descriptions, collected in rule-evaluation order.
/// They are never fatal: the validator reports every violation it finds and
/// keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// The rule category that fired.
    pub category: RuleCategory,
    /// Local name of the element the finding is anchored to.
    pub element: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Finding {
    /// Create a new finding.
    pub fn new(
        category: RuleCategory,
        element: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            element: element.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Custom task names registered by `UsingTask` declarations.
///
/// Scoped to a single validation run: built during the document-wide
/// discovery pass, consulted while judging `Target` children, then dropped.
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    names: HashSet<String>,
}

impl TaskRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom task name.
    pub fn register(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Whether the given element name is a registered custom task.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of registered task names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no task names are registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
