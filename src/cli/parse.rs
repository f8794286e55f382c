use clap::Args;
use serde::Serialize;

use crate::models::version::parse_version_components;
use crate::utils::error::Result;

/// Split a version string into major, minor and patch
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Dotted version with one to three numeric components
    pub version: String,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for parse command
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ParseCommand {
    /// Execute the parse command
    pub fn run(&self) -> Result<()> {
        let (major, minor, patch) = parse_version_components(&self.version)?;

        if self.json {
            crate::cli::print_json(&ParseResponse { major, minor, patch })
        } else {
            println!("({major}, {minor}, {patch})");
            Ok(())
        }
    }
}
