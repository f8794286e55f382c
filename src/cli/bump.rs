use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::services::version_file_updater::IncrementOutcome;
use crate::utils::config::BumpConfig;
use crate::utils::error::{BumpError, Result, UserError};

/// Increment the patch number of the version file
#[derive(Debug, Args)]
pub struct BumpCommand {
    /// Version file to update (default: VERSION)
    #[arg(long, env = "VERBUMP_FILE")]
    pub file: Option<PathBuf>,

    /// Exit non-zero when the file cannot be bumped
    #[arg(long)]
    pub strict: bool,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for bump command
#[derive(Debug, Serialize)]
pub struct BumpResponse<'a> {
    pub path: String,
    #[serde(flatten)]
    pub outcome: &'a IncrementOutcome,
}

impl BumpCommand {
    /// Execute the bump command
    pub fn run(&self, config: Option<&Path>) -> Result<()> {
        let config = BumpConfig::load(config)?.with_overrides(self.file.clone(), self.strict);
        let updater = config.updater();

        let outcome = match updater.increment_on_commit() {
            Ok(outcome) => outcome,
            Err(err) if config.strict => return Err(err),
            Err(err) => {
                debug!(error = %err, "version bump failed, continuing");
                UserError::from_bump_error(&err).print();
                return Ok(());
            }
        };

        let path = updater.path().display().to_string();
        if self.json {
            crate::cli::print_json(&BumpResponse {
                path,
                outcome: &outcome,
            })?;
        } else {
            match &outcome {
                IncrementOutcome::Created { version } => {
                    println!("Created {path} with {version}");
                }
                IncrementOutcome::Incremented { previous, next } => {
                    println!("Bumped {path} from {previous} to {next}");
                }
                IncrementOutcome::Skipped { .. } => {}
            }
        }

        if let IncrementOutcome::Skipped { reason } = outcome {
            if config.strict {
                return Err(BumpError::Skipped(reason));
            }
            eprintln!("Skipped: {reason}");
        }

        Ok(())
    }
}
