//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Synchronize a FreeBSD source subset into an RTEMS libbsd build tree, or
/// revert the vendored tree back to the upstream layout.
#[derive(Parser, Debug)]
#[command(name = "bsdsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// FreeBSD source directory
    #[arg(short = 'f', long = "freebsd", value_name = "DIR")]
    pub freebsd: PathBuf,

    /// RTEMS destination directory
    #[arg(short = 'r', long = "rtems", value_name = "DIR")]
    pub rtems: PathBuf,

    /// Reverse the default FreeBSD -> RTEMS direction
    #[arg(short = 'R', long)]
    pub reverse: bool,

    /// Just generate the Makefile
    #[arg(short = 'm', long = "makefile")]
    pub makefile_only: bool,

    /// Run the program but make no modifications
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Evaluate arguments, print the resolved configuration, and exit
    #[arg(short = 'e', long)]
    pub early_exit: bool,

    /// Enable verbose output mode
    #[arg(short, long)]
    pub verbose: bool,

    /// Read the module catalog from FILE instead of the embedded one
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}
