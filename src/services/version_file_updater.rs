use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::version::{Version, VersionError};
use crate::utils::error::{BumpError, Result};

/// File bumped when no path is configured
pub const DEFAULT_VERSION_FILE: &str = "VERSION";

/// Written when the version file does not exist yet; the implied prior
/// version is 1.0.0.
pub const DEFAULT_NEXT_VERSION: Version = Version::new(1, 0, 1);

/// What a single `increment_on_commit` call did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IncrementOutcome {
    /// The file was missing and has been created
    Created { version: Version },
    /// The file held `previous` and now holds `next`
    Incremented { previous: Version, next: Version },
    /// The path exists but is not a regular file; nothing was written
    Skipped { reason: String },
}

impl IncrementOutcome {
    /// The version now stored on disk, if anything was written
    pub const fn version(&self) -> Option<Version> {
        match self {
            Self::Created { version } => Some(*version),
            Self::Incremented { next, .. } => Some(*next),
            Self::Skipped { .. } => None,
        }
    }

    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Advances the patch component of a version file, one step per call
#[derive(Debug, Clone)]
pub struct VersionFileUpdater {
    path: PathBuf,
    default_next: Version,
}

impl Default for VersionFileUpdater {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION_FILE)
    }
}

impl VersionFileUpdater {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            default_next: DEFAULT_NEXT_VERSION,
        }
    }

    /// Override the version written when the file is missing
    #[must_use]
    pub const fn with_default_next(mut self, version: Version) -> Self {
        self.default_next = version;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn default_next(&self) -> Version {
        self.default_next
    }

    /// Bump the version file once.
    ///
    /// A missing file is created with the default next version. A path that
    /// exists but is not a regular file is left untouched and reported as
    /// [`IncrementOutcome::Skipped`]. Otherwise the file is read, its patch
    /// component incremented and the whole content replaced through the same
    /// handle.
    pub fn increment_on_commit(&self) -> Result<IncrementOutcome> {
        match fs::metadata(&self.path) {
            Err(err) if err.kind() == ErrorKind::NotFound => self.create(),
            Err(err) => Err(BumpError::file_access(&self.path, err)),
            Ok(metadata) if !metadata.is_file() => {
                let reason = format!("{} is not a regular file", self.path.display());
                warn!(path = %self.path.display(), "version path is not a regular file, skipping");
                Ok(IncrementOutcome::Skipped { reason })
            }
            Ok(_) => self.rewrite(),
        }
    }

    /// Read the stored version without modifying it; `None` if the file is missing
    pub fn current_version(&self) -> Result<Option<Version>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                debug!(path = %self.path.display(), "read version file");
                Ok(Some(Version::from_string(&content)?))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.read_error(err)),
        }
    }

    /// Undecodable content is a format problem, not an access problem
    fn read_error(&self, err: std::io::Error) -> BumpError {
        if err.kind() == ErrorKind::InvalidData {
            VersionError::InvalidFormat(format!("{} is not valid UTF-8", self.path.display()))
                .into()
        } else {
            BumpError::file_access(&self.path, err)
        }
    }

    fn create(&self) -> Result<IncrementOutcome> {
        let version = self.default_next;
        // A dangling symlink is written through to its target.
        let dangling_link = fs::symlink_metadata(&self.path).is_ok();
        let mut file = OpenOptions::new()
            .write(true)
            .create(dangling_link)
            .truncate(dangling_link)
            .create_new(!dangling_link)
            .open(&self.path)
            .map_err(|e| BumpError::file_access(&self.path, e))?;
        file.write_all(version.to_display_string().as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| BumpError::file_access(&self.path, e))?;

        info!(path = %self.path.display(), %version, "created version file");
        Ok(IncrementOutcome::Created { version })
    }

    fn rewrite(&self) -> Result<IncrementOutcome> {
        let access = |e| BumpError::file_access(&self.path, e);

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(access)?;

        let mut content = String::new();
        file.read_to_string(&mut content).map_err(|e| self.read_error(e))?;
        debug!(path = %self.path.display(), content = content.trim(), "read version file");

        let previous = Version::from_string(&content)?;
        let next = previous.bump_patch()?;

        file.seek(SeekFrom::Start(0)).map_err(access)?;
        file.set_len(0).map_err(access)?;
        file.write_all(next.to_display_string().as_bytes()).map_err(access)?;
        file.flush().map_err(access)?;

        info!(path = %self.path.display(), %previous, %next, "bumped version file");
        Ok(IncrementOutcome::Incremented { previous, next })
    }
}
