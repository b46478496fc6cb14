//! Error types for bsdsync-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from bsdsync-core
    #[error(transparent)]
    Core(#[from] bsdsync_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Exit status for this error: configuration problems exit with a
    /// distinguished status of 2, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Core(e) if e.is_configuration() => 2,
            _ => 1,
        }
    }
}
