//! Implementation of the `projlint check` command.
//!
//! Parses each input file into a tree and runs structural validation over
//! it. Findings never abort the run: every file is checked and reported
//! before the command maps a non-empty total to a validation error. A
//! syntax error is the other failure path: it aborts immediately with its
//! own exit code, since no tree exists to validate.

mod report;


use crate::cli::CheckArgs;
use crate::config::{CONFIG_FILE_NAME, Config, ReportFormat};
use crate::error::{ProjLintError, Result};
use crate::validate::validate_structure;
use crate::xml;
use std::path::Path;

use report::FileReport;

/// Execute the `projlint check` command.
///
/// # Exit Codes
///
/// - 0: All files are structurally valid
/// - 1: User error (unreadable file, invalid config, unknown format)
/// - 2: Validation failure (one or more findings)
/// - 3: Syntax failure (a file is not well-formed XML)
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let format = resolve_format(args.format.as_deref(), &config)?;
    let options = config.structure_options();

    // ========================================================================
    // Phase 1: Parse and validate every file
    // ========================================================================

    let mut reports = Vec::new();

    for path in &args.files {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ProjLintError::UserError(format!("failed to read '{}': {}", path.display(), e))
        })?;

        let document = xml::parse_str(&content)
            .map_err(|e| ProjLintError::syntax(path.display().to_string(), e))?;

        let findings = validate_structure(Some(&document.root), &options);
        reports.push(FileReport::new(path.display().to_string(), findings));
    }

    // ========================================================================
    // Phase 2: Render the report
    // ========================================================================

    match format {
        ReportFormat::Text => print!("{}", report::render_text(&reports)),
        ReportFormat::Json => println!("{}", report::render_json(&reports)?),
    }

    // ========================================================================
    // Phase 3: Map findings to the exit code
    // ========================================================================

    let total_findings: usize = reports.iter().map(|r| r.findings.len()).sum();
    if total_findings == 0 {
        return Ok(());
    }

    let failing_files = reports.iter().filter(|r| !r.passed()).count();
    Err(ProjLintError::ValidationError(format!(
        "{} structural violation(s) across {} file(s)",
        total_findings, failing_files
    )))
}

/// Load the config: explicit path, else `projlint.yaml` in the working
/// directory when present, else defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    let default_path = Path::new(CONFIG_FILE_NAME);
    if default_path.exists() {
        return Config::load(default_path);
    }

    Ok(Config::default())
}

/// Resolve the report format from the CLI flag, falling back to the config.
fn resolve_format(flag: Option<&str>, config: &Config) -> Result<ReportFormat> {
    match flag {
        Some(s) => ReportFormat::from_str(s).ok_or_else(|| {
            ProjLintError::UserError(format!(
                "unknown report format '{}'. Expected 'text' or 'json'.",
                s
            ))
        }),
        None => Ok(config.format),
    }
}
