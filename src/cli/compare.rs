use clap::Args;
use serde::Serialize;

use crate::models::version::Version;
use crate::utils::error::Result;

/// Compare two versions
#[derive(Debug, Args)]
pub struct CompareCommand {
    /// Left-hand version, e.g. 1.2.8
    pub this: String,

    /// Right-hand version, e.g. 2.4.5
    pub other: String,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for compare command
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub this: Version,
    pub other: Version,
    pub result: i8,
}

impl CompareCommand {
    /// Execute the compare command
    pub fn run(&self) -> Result<()> {
        let this = Version::from_string(&self.this)?;
        let other = Version::from_string(&self.other)?;
        let ordering = this.compare(&other);

        if self.json {
            crate::cli::print_json(&CompareResponse {
                this,
                other,
                result: ordering.as_i8(),
            })
        } else {
            println!("{ordering}");
            Ok(())
        }
    }
}
