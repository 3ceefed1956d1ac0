//! Configuration model for projlint.
//!
//! This module defines the Config struct that represents `projlint.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored)
//! and sensible defaults for all fields, so a missing config file means
//! "check everything, report as text".


use crate::error::{ProjLintError, Result};
use crate::validate::StructureOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "projlint.yaml";

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Human-readable per-file report.
    #[default]
    Text,
    /// Machine-readable JSON report.
    Json,
}

impl ReportFormat {
    /// Parse a report format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration for projlint.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Validate `ItemGroup` elements at the root and inside `Target`.
    #[serde(default = "default_true")]
    pub check_item_groups: bool,

    /// Validate `PropertyGroup` elements at the root and inside `Target`.
    #[serde(default = "default_true")]
    pub check_property_groups: bool,

    /// Default report format; the `--format` flag overrides it.
    #[serde(default)]
    pub format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            check_item_groups: true,
            check_property_groups: true,
            format: ReportFormat::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the projlint.yaml file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded config
    /// * `Err(ProjLintError::UserError)` - Unreadable file or parse error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ProjLintError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| ProjLintError::UserError(format!("failed to parse config YAML: {}", e)))
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ProjLintError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// The validation pass toggles this config selects.
    pub fn structure_options(&self) -> StructureOptions {
        StructureOptions {
            check_item_groups: self.check_item_groups,
            check_property_groups: self.check_property_groups,
        }
    }
}

pub(crate) fn default_true() -> bool {
    true
}
