//! Error types for the projlint CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//!
//! Two failure classes exist end to end and never mix: syntax errors (the
//! parser could not produce a tree) and validation failures (the tree was
//! produced and one or more structural findings were reported). Each maps
//! to its own exit code.

use crate::exit_codes;
use crate::xml::SyntaxError;
use thiserror::Error;

/// Main error type for projlint operations.
#[derive(Error, Debug)]
pub enum ProjLintError {
    /// User provided invalid arguments, an unreadable file, or invalid config.
    #[error("{0}")]
    UserError(String),

    /// Structural validation reported findings.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// The input file is not well-formed XML.
    #[error("failed to parse '{path}': {source}")]
    Syntax {
        /// Path of the file that failed to parse.
        path: String,
        /// The underlying syntax error with line/column position.
        #[source]
        source: SyntaxError,
    },
}

impl ProjLintError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProjLintError::UserError(_) => exit_codes::USER_ERROR,
            ProjLintError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            ProjLintError::Syntax { .. } => exit_codes::SYNTAX_FAILURE,
        }
    }

    /// Wrap a syntax error with the path of the offending file.
    pub fn syntax(path: impl Into<String>, source: SyntaxError) -> Self {
        ProjLintError::Syntax {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for projlint operations.
pub type Result<T> = std::result::Result<T, ProjLintError>;
