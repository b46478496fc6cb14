//! Synchronization driver
//!
//! Two linear flows, no intermediate states, no retries: the first fatal
//! error aborts the run and files already written remain written. No two
//! files are ever processed concurrently; the only ordering requirement is
//! all placeholders before all modules on the forward path.

use crate::Result;
use crate::catalog::Registry;
use crate::config::{Direction, SyncConfig};
use crate::install::FileInstaller;
use crate::makefile;

/// Ordered record of what a run did or, on dry-run, would have done.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Human-readable actions in execution order.
    pub actions: Vec<String>,
}

impl SyncReport {
    fn record(&mut self, action: Option<String>) {
        if let Some(action) = action {
            self.actions.push(action);
        }
    }
}

/// Walks the registry in one direction, driving the installer per file.
pub struct SyncEngine<'a> {
    config: &'a SyncConfig,
    registry: &'a Registry,
}

impl<'a> SyncEngine<'a> {
    /// Create an engine, validating the configuration eagerly — before any
    /// filesystem mutation.
    pub fn new(config: &'a SyncConfig, registry: &'a Registry) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, registry })
    }

    /// Run the configured direction to completion.
    pub fn run(&self) -> Result<SyncReport> {
        match self.config.direction {
            Direction::Forward => self.install_all(),
            Direction::Reverse => self.revert_all(),
        }
    }

    /// Forward flow: every placeholder, then every module's headers and
    /// sources in registry order, then the Makefile.
    fn install_all(&self) -> Result<SyncReport> {
        let installer = FileInstaller::new(self.config);
        let mut report = SyncReport::default();
        if !self.config.makefile_only {
            for file in self.registry.empty_files() {
                report.record(installer.install_empty(file)?);
            }
            for module in self.registry.modules() {
                tracing::debug!(module = module.name(), "installing module");
                for file in module.headers() {
                    report.record(installer.install_header(file)?);
                }
                for file in module.sources() {
                    report.record(installer.install_source(file)?);
                }
            }
        }
        report.record(makefile::write(self.config, self.registry)?);
        Ok(report)
    }

    /// Reverse flow: modules only. Placeholders are never round-tripped
    /// and no Makefile is emitted.
    fn revert_all(&self) -> Result<SyncReport> {
        let installer = FileInstaller::new(self.config);
        let mut report = SyncReport::default();
        for module in self.registry.modules() {
            tracing::debug!(module = module.name(), "reverting module");
            for file in module.headers() {
                report.record(installer.revert_header(file)?);
            }
            for file in module.sources() {
                report.record(installer.revert_source(file)?);
            }
        }
        Ok(report)
    }
}
