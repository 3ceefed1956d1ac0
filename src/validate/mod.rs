//! Validation module for projlint.
//!
//! This module provides the structural rule engine for project documents:
//! element placement, required attributes, singleton rules, and per-element
//! child allow-lists, including custom task names registered by `UsingTask`
//! declarations.

pub mod structure;

pub use structure::{
    Finding, RuleCategory, StructureOptions, TaskRegistry, validate_structure,
};
