//! Synchronization engine for the vendored FreeBSD tree
//!
//! Data flows one way per run:
//!
//! ```text
//! registry -> engine -> installer -> (path mapper, include rewriter,
//!                                     differential writer) -> filesystem
//! ```
//!
//! No component holds state across files; each file is processed
//! independently, in registration order. The catalog is pure data and can
//! be swapped without touching the engine.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod install;
pub mod makefile;

pub use catalog::{CatalogFile, Module, ModuleSpec, Registry};
pub use config::{Direction, SyncConfig};
pub use engine::{SyncEngine, SyncReport};
pub use error::{Error, Result};
pub use install::FileInstaller;
