// Configuration utilities and TOML parsing

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::models::version::Version;
use crate::services::version_file_updater::{
    VersionFileUpdater, DEFAULT_NEXT_VERSION, DEFAULT_VERSION_FILE,
};
use crate::utils::error::{BumpError, Result};

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "verbump.toml";

/// Raw `verbump.toml` layout
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    #[serde(default)]
    version_file: VersionFileToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct VersionFileToml {
    path: Option<PathBuf>,
    default_next: Option<String>,
    strict: Option<bool>,
}

/// Resolved settings for the version file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpConfig {
    pub path: PathBuf,
    pub default_next: Version,
    pub strict: bool,
}

impl Default for BumpConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_VERSION_FILE),
            default_next: DEFAULT_NEXT_VERSION,
            strict: false,
        }
    }
}

impl BumpConfig {
    /// Load settings.
    ///
    /// An explicit path must exist. Without one, `verbump.toml` in the current
    /// directory is used if present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(BumpError::ConfigError(format!(
                        "Configuration file not found: {}",
                        path.display()
                    )));
                }
                Self::load_file(path)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::load_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BumpError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "loaded configuration");
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let raw: ConfigToml = toml::from_str(content)
            .map_err(|e| BumpError::ConfigError(format!("Invalid TOML syntax: {e}")))?;

        let defaults = Self::default();
        let default_next = match raw.version_file.default_next {
            Some(text) => Version::from_string(&text).map_err(|e| {
                BumpError::ConfigError(format!("Invalid default_next '{text}': {e}"))
            })?,
            None => defaults.default_next,
        };

        Ok(Self {
            path: raw.version_file.path.unwrap_or(defaults.path),
            default_next,
            strict: raw.version_file.strict.unwrap_or(defaults.strict),
        })
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(mut self, path: Option<PathBuf>, strict: bool) -> Self {
        if let Some(path) = path {
            self.path = path;
        }
        self.strict |= strict;
        self
    }

    pub fn updater(&self) -> VersionFileUpdater {
        VersionFileUpdater::new(&self.path).with_default_next(self.default_next)
    }
}
