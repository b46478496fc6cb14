//! Error types for bsdsync-core

use std::path::PathBuf;

/// Result type for bsdsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bsdsync-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A tree root given on the command line does not exist.
    #[error("{name} directory {path} does not exist")]
    RootNotFound { name: &'static str, path: PathBuf },

    /// Makefile-only generation has no meaning on a reverse run.
    #[error("makefile-only mode cannot be combined with a reverse run")]
    MakefileOnlyWithReverse,

    /// A catalog entry landed in the wrong file list.
    #[error("{path} does not end in .{expected}; move it to the {other} file list")]
    MisclassifiedFile {
        path: String,
        expected: &'static str,
        other: &'static str,
    },

    /// A path is claimed by more than one file list.
    #[error("{path} is registered more than once")]
    DuplicateFile { path: String },

    /// Catalog TOML could not be parsed.
    #[error("failed to parse catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),

    /// Filesystem error from bsdsync-fs
    #[error(transparent)]
    Fs(#[from] bsdsync_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Configuration errors are detected before any filesystem mutation and
    /// exit with a distinguished status at the CLI boundary.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::RootNotFound { .. }
                | Self::MakefileOnlyWithReverse
                | Self::MisclassifiedFile { .. }
                | Self::DuplicateFile { .. }
                | Self::CatalogParse(_)
        )
    }
}
