// Common error types for verbump

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::models::version::VersionError;

#[derive(Debug)]
pub enum BumpError {
    FileAccess { path: PathBuf, source: std::io::Error },
    ConfigError(String),
    ValidationError(String),
    Version(VersionError),
    Skipped(String),
}

impl BumpError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess { path: path.into(), source }
    }
}

impl fmt::Display for BumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileAccess { path, source } => {
                write!(f, "Cannot access version file {}: {source}", path.display())
            }
            Self::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            Self::Version(err) => write!(f, "{err}"),
            Self::Skipped(msg) => write!(f, "Skipped: {msg}"),
        }
    }
}

impl Error for BumpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FileAccess { source, .. } => Some(source),
            Self::Version(err) => Some(err),
            _ => None,
        }
    }
}

impl From<VersionError> for BumpError {
    fn from(err: VersionError) -> Self {
        Self::Version(err)
    }
}

pub type Result<T> = std::result::Result<T, BumpError>;

/// An error ready to be shown to the user, with the exit code to use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    pub fn from_bump_error(err: &BumpError) -> Self {
        let exit_code = match err {
            BumpError::ConfigError(_) => 2,
            _ => 1,
        };
        Self::new(err.to_string(), exit_code)
    }

    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
    }
}
