// verbump - semantic version parsing and commit-driven patch bumps
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::version::{
    compare_versions, parse_version_components, Version, VersionError, VersionInput,
    VersionOrdering,
};
pub use services::version_file_updater::{IncrementOutcome, VersionFileUpdater};
pub use utils::error::{BumpError, Result};
