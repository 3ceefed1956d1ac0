//! Report rendering for the `check` command.

use crate::error::{ProjLintError, Result};
use crate::validate::Finding;
use serde::Serialize;

/// Validation results for one input file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// The file path as given on the command line.
    pub file: String,
    /// Findings for this file, in rule-evaluation order.
    pub findings: Vec<Finding>,
}

impl FileReport {
    /// Create a report for one file.
    pub fn new(file: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self {
            file: file.into(),
            findings,
        }
    }

    /// Whether the file had no findings.
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Render the per-file text report.
///
/// ```text
/// app.csproj: FAIL (2 findings)
///   [import] <Import> element must have a non-empty 'Project' attribute.
///   [target] <Target> element must have a non-empty 'Name' attribute.
/// lib.csproj: PASS
///
/// 2 file(s) checked, 2 finding(s).
/// ```
pub fn render_text(reports: &[FileReport]) -> String {
    let mut out = String::new();

    for report in reports {
        if report.passed() {
            out.push_str(&format!("{}: PASS\n", report.file));
        } else {
            out.push_str(&format!(
                "{}: FAIL ({} finding(s))\n",
                report.file,
                report.findings.len()
            ));
            for finding in &report.findings {
                out.push_str(&format!("  [{}] {}\n", finding.category, finding.message));
            }
        }
    }

    let total: usize = reports.iter().map(|r| r.findings.len()).sum();
    out.push_str(&format!(
        "\n{} file(s) checked, {} finding(s).\n",
        reports.len(),
        total
    ));

    out
}

/// Render the reports as pretty-printed JSON.
pub fn render_json(reports: &[FileReport]) -> Result<String> {
    serde_json::to_string_pretty(reports)
        .map_err(|e| ProjLintError::UserError(format!("failed to serialize report: {}", e)))
}
