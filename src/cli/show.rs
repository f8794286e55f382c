use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::models::version::Version;
use crate::utils::config::BumpConfig;
use crate::utils::error::{BumpError, Result};

/// Print the version stored in the version file
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Version file to read (default: VERSION)
    #[arg(long, env = "VERBUMP_FILE")]
    pub file: Option<PathBuf>,

    /// Print the constructor form, e.g. Version(1, 0, 1)
    #[arg(long, conflicts_with = "json")]
    pub repr: bool,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for show command
#[derive(Debug, Serialize)]
pub struct ShowResponse {
    pub path: String,
    pub version: Version,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ShowCommand {
    /// Execute the show command
    pub fn run(&self, config: Option<&Path>) -> Result<()> {
        let config = BumpConfig::load(config)?.with_overrides(self.file.clone(), false);
        let updater = config.updater();

        let version = updater.current_version()?.ok_or_else(|| {
            BumpError::ValidationError(format!(
                "Version file '{}' not found (run `verbump bump` to create it)",
                updater.path().display()
            ))
        })?;

        if self.json {
            crate::cli::print_json(&ShowResponse {
                path: updater.path().display().to_string(),
                version,
                major: version.major,
                minor: version.minor,
                patch: version.patch,
            })
        } else if self.repr {
            println!("{}", version.to_machine_string());
            Ok(())
        } else {
            println!("{}", version.to_display_string());
            Ok(())
        }
    }
}
