// CLI module for command-line interface

pub mod bump;
pub mod compare;
pub mod parse;
pub mod show;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::utils::error::Result;

use self::bump::BumpCommand;
use self::compare::CompareCommand;
use self::parse::ParseCommand;
use self::show::ShowCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "verbump")]
#[command(about = "Parse, compare and auto-increment semantic version files")]
#[command(long_about = r#"verbump keeps a plain-text VERSION file in step with your commits.

Install it as a commit hook and every commit advances the patch number:
  1.0.0 -> 1.0.1 -> 1.0.2

If the file does not exist yet it is created with 1.0.1.

Examples:
  verbump bump                      Increment the patch number of ./VERSION
  verbump bump --file app/VERSION   Use another version file
  verbump show --repr               Print Version(1, 0, 1)
  verbump compare 1.2.8 2.4.5       Print -1, 0 or 1
  verbump parse 5.6                 Print (5, 6, 0)

Hook script (.git/hooks/post-commit):
  #!/bin/sh
  exec verbump bump"#)]
#[command(version)]
pub struct Cli {
    /// Tracing filter, e.g. "info" or "verbump=debug"
    #[arg(long, global = true, env = "VERBUMP_LOG")]
    pub log_level: Option<String>,

    /// Configuration file (default: ./verbump.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Increment the patch number of the version file (commit hook entry point)
    #[command(long_about = r#"Increment the patch number of the version file.

Meant to run from a commit hook, once per commit:
  • Missing file: created with 1.0.1 (or version_file.default_next)
  • Existing file: patch number raised by one, major and minor unchanged
  • Path is a directory or other non-file: left alone

Failures are reported but exit 0 so a commit is never blocked.
Pass --strict (or set version_file.strict) to exit non-zero instead.

Examples:
  verbump bump
  verbump bump --file VERSION.txt --strict
  verbump bump --json"#)]
    Bump(BumpCommand),

    /// Print the version stored in the version file
    Show(ShowCommand),

    /// Compare two versions and print 1, 0 or -1
    Compare(CompareCommand),

    /// Split a version string into its three components
    Parse(ParseCommand),
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub fn execute(command: Commands, config: Option<&Path>) -> Result<()> {
        match command {
            Commands::Bump(cmd) => cmd.run(config),
            Commands::Show(cmd) => cmd.run(config),
            Commands::Compare(cmd) => cmd.run(),
            Commands::Parse(cmd) => cmd.run(),
        }
    }
}

/// Serialize a response as pretty JSON and print it
pub(crate) fn print_json<T: serde::Serialize>(response: &T) -> Result<()> {
    let json_output = serde_json::to_string_pretty(response).map_err(|e| {
        crate::utils::error::BumpError::ValidationError(format!(
            "Failed to serialize JSON response: {e}"
        ))
    })?;
    println!("{json_output}");
    Ok(())
}
