//! bsdsync command-line interface
//!
//! Vendors a FreeBSD kernel subset into an RTEMS libbsd build tree, and
//! reconstructs the upstream layout from it for re-diffing against new
//! FreeBSD snapshots.

mod cli;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use bsdsync_core::{Direction, Registry, SyncConfig, SyncEngine};
use bsdsync_fs::NormalizedPath;

use cli::Cli;
use error::Result;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let config = SyncConfig {
        source_root: NormalizedPath::new(&cli.freebsd),
        dest_root: NormalizedPath::new(&cli.rtems),
        direction: if cli.reverse {
            Direction::Reverse
        } else {
            Direction::Forward
        },
        makefile_only: cli.makefile_only,
        dry_run: cli.dry_run,
        verbose: cli.verbose,
    };

    print_configuration(&config);
    config.validate()?;

    if cli.early_exit {
        println!("Early exit at user request");
        return Ok(());
    }

    let registry = match &cli.catalog {
        Some(path) => Registry::parse(&std::fs::read_to_string(path)?)?,
        None => Registry::embedded()?,
    };

    match config.direction {
        Direction::Forward => println!("Generating into {}", config.dest_root),
        Direction::Reverse => println!("Reverting from {}", config.dest_root),
    }

    let engine = SyncEngine::new(&config, &registry)?;
    let report = engine.run()?;

    if config.verbose {
        for action in &report.actions {
            println!("   {} {}", "+".green(), action);
        }
    }
    println!(
        "{} {} run complete: {} actions",
        "OK".green().bold(),
        config.direction,
        report.actions.len()
    );
    Ok(())
}

fn print_configuration(config: &SyncConfig) {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };
    println!("Verbose:                {}", yes_no(config.verbose));
    println!("Dry Run:                {}", yes_no(config.dry_run));
    println!("Only Generate Makefile: {}", yes_no(config.makefile_only));
    println!("RTEMS Directory:        {}", config.dest_root);
    println!("FreeBSD Directory:      {}", config.source_root);
    println!("Direction:              {}", config.direction);
}
