//! Run configuration
//!
//! One immutable value constructed at startup and passed by reference into
//! every component; nothing reads configuration ambiently.

use std::fmt;

use bsdsync_fs::NormalizedPath;

use crate::{Error, Result};

/// Transformation direction, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Upstream FreeBSD tree into the vendored RTEMS tree.
    #[default]
    Forward,
    /// Reconstruct the upstream layout from the vendored tree.
    Reverse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Reverse => write!(f, "reverse"),
        }
    }
}

/// Immutable configuration for one synchronization run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Upstream FreeBSD source root.
    pub source_root: NormalizedPath,
    /// RTEMS destination root holding the vendored tree.
    pub dest_root: NormalizedPath,
    pub direction: Direction,
    /// Skip file installation and only regenerate the Makefile.
    pub makefile_only: bool,
    /// Log intended actions without touching the filesystem.
    pub dry_run: bool,
    /// Echo every action to the terminal.
    pub verbose: bool,
}

impl SyncConfig {
    /// Validate the configuration before any filesystem activity.
    ///
    /// Both roots must denote existing directories, and makefile-only is
    /// meaningless on a reverse run.
    pub fn validate(&self) -> Result<()> {
        if !self.source_root.is_dir() {
            return Err(Error::RootNotFound {
                name: "FreeBSD",
                path: self.source_root.to_native(),
            });
        }
        if !self.dest_root.is_dir() {
            return Err(Error::RootNotFound {
                name: "RTEMS",
                path: self.dest_root.to_native(),
            });
        }
        if self.makefile_only && self.direction == Direction::Reverse {
            return Err(Error::MakefileOnlyWithReverse);
        }
        Ok(())
    }
}
