//! Opaque file references
//!
//! The panel never touches the filesystem; it only carries a [`FileRef`]
//! back and forth. The host treats it as a `/`-separated path when it
//! needs to derive the output location.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to a file known to the host
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileRef(String);

impl FileRef {
    /// Creates a file reference from a path-like string
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the underlying path string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the final path segment
    ///
    /// Falls back to `"file"` when the path is empty or ends with a
    /// separator, so callers always have a usable base name.
    pub fn file_name(&self) -> &str {
        match self.0.rsplit('/').next() {
            Some(name) if !name.is_empty() => name,
            _ => "file",
        }
    }

    /// Returns a reference to a sibling file: same directory, new name
    pub fn sibling(&self, name: &str) -> FileRef {
        match self.0.rfind('/') {
            Some(idx) => FileRef(format!("{}/{}", &self.0[..idx], name)),
            None => FileRef(name.to_string()),
        }
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FileRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
