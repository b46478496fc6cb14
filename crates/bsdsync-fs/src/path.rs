//! Normalized path handling
//!
//! Every relative path in the module catalog uses forward slashes. Paths are
//! kept in that form internally and converted to the platform-native form
//! only at I/O boundaries.

use std::path::{Path, PathBuf};

/// A path stored with forward slashes regardless of platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a normalized path from any path-like input, converting
    /// backslashes to forward slashes.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy();
        Self {
            inner: raw.replace('\\', "/"),
        }
    }

    /// The normalized string form.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native `PathBuf` for I/O.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append a relative segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let inner = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner }
    }

    /// Whether the path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Whether the path is an existing directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}
