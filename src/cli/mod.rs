//! CLI argument parsing for projlint.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Projlint: structural linter for MSBuild-style project files.
///
/// Parses project documents into a tree and checks element placement,
/// required attributes, singleton rules, and per-element child allow-lists,
/// including custom tasks registered by UsingTask declarations.
#[derive(Parser, Debug)]
#[command(name = "projlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for projlint.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check project files for structural violations.
    ///
    /// Parses each file and reports every finding; exits nonzero when any
    /// file has findings or fails to parse.
    Check(CheckArgs),

    /// List the rule categories the checker applies.
    Rules,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Project files to check.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format (text, json). Overrides the config file.
    #[arg(long)]
    pub format: Option<String>,

    /// Path to a projlint.yaml config file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_check_single_file() {
        let cli = Cli::try_parse_from(["projlint", "check", "app.csproj"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.files, vec![PathBuf::from("app.csproj")]);
            assert_eq!(args.format, None);
            assert_eq!(args.config, None);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_check_multiple_files() {
        let cli = Cli::try_parse_from(["projlint", "check", "a.csproj", "b.csproj"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.files.len(), 2);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_check_requires_a_file() {
        let result = Cli::try_parse_from(["projlint", "check"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_check_with_format_and_config() {
        let cli = Cli::try_parse_from([
            "projlint",
            "check",
            "app.csproj",
            "--format",
            "json",
            "--config",
            "custom.yaml",
        ])
        .unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.format.as_deref(), Some("json"));
            assert_eq!(args.config, Some(PathBuf::from("custom.yaml")));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_rules() {
        let cli = Cli::try_parse_from(["projlint", "rules"]).unwrap();
        assert!(matches!(cli.command, Command::Rules));
    }
}
