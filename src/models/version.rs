use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// Version string does not decompose into numeric components
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),

    /// Constructor received an input shape it cannot interpret
    #[error("Invalid version input: {0}")]
    InvalidType(String),

    /// Incrementing a component would exceed `u64::MAX`
    #[error("Version component overflow while incrementing {0}")]
    Overflow(String),
}

/// Result of comparing two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionOrdering {
    Less,
    Equal,
    Greater,
}

impl VersionOrdering {
    /// Returns -1, 0 or 1
    pub const fn as_i8(self) -> i8 {
        match self {
            Self::Less => -1,
            Self::Equal => 0,
            Self::Greater => 1,
        }
    }
}

impl From<Ordering> for VersionOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl From<VersionOrdering> for Ordering {
    fn from(ordering: VersionOrdering) -> Self {
        match ordering {
            VersionOrdering::Less => Self::Less,
            VersionOrdering::Equal => Self::Equal,
            VersionOrdering::Greater => Self::Greater,
        }
    }
}

impl fmt::Display for VersionOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

/// The accepted construction shapes for a [`Version`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionInput {
    /// `major[, minor[, patch]]`
    Parts(u64, Option<u64>, Option<u64>),
    /// One to three components, in order
    Sequence(Vec<u64>),
    /// Dotted string such as `1.2.3`
    Text(String),
}

impl From<&str> for VersionInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<(u64, u64)> for VersionInput {
    fn from((major, minor): (u64, u64)) -> Self {
        Self::Sequence(vec![major, minor])
    }
}

impl From<(u64, u64, u64)> for VersionInput {
    fn from((major, minor, patch): (u64, u64, u64)) -> Self {
        Self::Sequence(vec![major, minor, patch])
    }
}

/// A `major.minor.patch` version number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }

    /// Build from explicit components; unset trailing components default to 0
    pub fn from_parts(major: u64, minor: Option<u64>, patch: Option<u64>) -> Self {
        Self::new(major, minor.unwrap_or(0), patch.unwrap_or(0))
    }

    /// Build from one to three components, right-padding with 0
    pub fn from_sequence(parts: &[u64]) -> Result<Self, VersionError> {
        match *parts {
            [major] => Ok(Self::new(major, 0, 0)),
            [major, minor] => Ok(Self::new(major, minor, 0)),
            [major, minor, patch] => Ok(Self::new(major, minor, patch)),
            _ => Err(VersionError::InvalidType(format!(
                "expected 1 to 3 components, got {}",
                parts.len()
            ))),
        }
    }

    /// Parse a dotted version string
    pub fn from_string(s: &str) -> Result<Self, VersionError> {
        let (major, minor, patch) = parse_version_components(s)?;
        Ok(Self::new(major, minor, patch))
    }

    pub fn from_input(input: VersionInput) -> Result<Self, VersionError> {
        match input {
            VersionInput::Parts(major, minor, patch) => Ok(Self::from_parts(major, minor, patch)),
            VersionInput::Sequence(parts) => Self::from_sequence(&parts),
            VersionInput::Text(text) => Self::from_string(&text),
        }
    }

    /// Build from a loosely typed value: a string, a single non-negative
    /// integer, or an array of one to three non-negative integers.
    pub fn from_value(value: &Value) -> Result<Self, VersionError> {
        match value {
            Value::String(text) => Self::from_string(text),
            Value::Number(number) => number
                .as_u64()
                .map(|major| Self::new(major, 0, 0))
                .ok_or_else(|| {
                    VersionError::InvalidType(format!(
                        "expected a non-negative integer, got {number}"
                    ))
                }),
            Value::Array(items) => {
                let parts = items
                    .iter()
                    .map(|item| {
                        item.as_u64().ok_or_else(|| {
                            VersionError::InvalidType(format!(
                                "expected a non-negative integer component, got {item}"
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Self::from_sequence(&parts)
            }
            other => Err(VersionError::InvalidType(format!(
                "unsupported version input {other}"
            ))),
        }
    }

    /// Canonical tuple used for ordering
    pub const fn as_tuple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    pub fn compare(&self, other: &Self) -> VersionOrdering {
        compare_versions(self.as_tuple(), other.as_tuple())
    }

    /// Increment the patch component in place
    pub fn increment_patch(&mut self) -> Result<(), VersionError> {
        self.patch = self
            .patch
            .checked_add(1)
            .ok_or_else(|| VersionError::Overflow(self.to_display_string()))?;
        Ok(())
    }

    /// Returns a copy with the patch component incremented
    pub fn bump_patch(&self) -> Result<Self, VersionError> {
        let mut next = *self;
        next.increment_patch()?;
        Ok(next)
    }

    /// Form that reads back as a constructor call, e.g. `Version(1, 2, 3)`
    pub fn to_machine_string(&self) -> String {
        format!("Version({}, {}, {})", self.major, self.minor, self.patch)
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<VersionInput> for Version {
    type Error = VersionError;

    fn try_from(input: VersionInput) -> Result<Self, Self::Error> {
        Self::from_input(input)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other).into()
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

/// Split a dotted version string into `(major, minor, patch)`.
///
/// Surrounding whitespace is ignored. Between one and three components are
/// accepted; missing trailing components are 0. Every component must be a
/// non-empty run of ASCII digits.
pub fn parse_version_components(s: &str) -> Result<(u64, u64, u64), VersionError> {
    let trimmed = s.trim();
    let tokens: Vec<&str> = trimmed.split('.').collect();

    if tokens.len() > 3 {
        return Err(VersionError::InvalidFormat(format!(
            "'{trimmed}' has {} components, expected at most 3",
            tokens.len()
        )));
    }

    let mut components = [0u64; 3];
    for (slot, token) in components.iter_mut().zip(&tokens) {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VersionError::InvalidFormat(format!(
                "'{trimmed}' has non-numeric component '{token}'"
            )));
        }
        *slot = token.parse().map_err(|_| {
            VersionError::InvalidFormat(format!("component '{token}' of '{trimmed}' is too large"))
        })?;
    }

    Ok((components[0], components[1], components[2]))
}

/// Lexicographic comparison of `(major, minor, patch)` tuples
pub fn compare_versions(this: (u64, u64, u64), other: (u64, u64, u64)) -> VersionOrdering {
    this.cmp(&other).into()
}
