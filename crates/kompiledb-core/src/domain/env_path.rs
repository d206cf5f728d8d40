//! Paths as they appear in the build environment.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A filesystem path exactly as the build recorded it.
///
/// Paths are opaque: no normalization, no separator conversion, no
/// resolution against the working directory. A database produced on Windows
/// under MSYS keeps its `C:/...` or `/C/...` spelling untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvPath(String);

impl EnvPath {
    /// Wrap a raw path string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The raw path string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EnvPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EnvPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl From<&str> for EnvPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl AsRef<str> for EnvPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
