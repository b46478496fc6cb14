//! Module catalog and registry
//!
//! A catalog is pure data: which upstream files belong to which logical
//! module, which paths are placeholders, and which destination-native
//! sources the Makefile lists. The registry validates that data at
//! registration time, before any filesystem activity, and is immutable for
//! the rest of the run.

use std::collections::HashSet;

use serde::Deserialize;

use crate::{Error, Result};

/// The full libbsd catalog, embedded at build time.
const LIBBSD_CATALOG: &str = include_str!("../data/libbsd.toml");

/// Raw catalog document as it appears in TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CatalogFile {
    /// Paths that must exist for compilation but whose content is
    /// immaterial.
    #[serde(default)]
    pub empty_files: Vec<String>,

    /// Destination-native sources listed in the Makefile, never
    /// synchronized.
    #[serde(default)]
    pub auxiliary_sources: Vec<String>,

    /// Logical modules in installation order.
    #[serde(default, rename = "module")]
    pub modules: Vec<ModuleSpec>,
}

/// One `[[module]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleSpec {
    pub name: String,
    /// Inert metadata: recorded, never consulted for ordering or
    /// validation.
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// A named logical unit of header and source files.
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    headers: Vec<String>,
    sources: Vec<String>,
    dependencies: Vec<String>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            headers: Vec::new(),
            sources: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    /// Add header files. Every path must end in `.h`.
    pub fn add_header_files<I, S>(&mut self, files: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for file in files {
            let file = file.into();
            if !file.ends_with(".h") {
                return Err(Error::MisclassifiedFile {
                    path: file,
                    expected: "h",
                    other: "source",
                });
            }
            self.headers.push(file);
        }
        Ok(())
    }

    /// Add source files. Every path must end in `.c`.
    pub fn add_source_files<I, S>(&mut self, files: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for file in files {
            let file = file.into();
            if !file.ends_with(".c") {
                return Err(Error::MisclassifiedFile {
                    path: file,
                    expected: "c",
                    other: "header",
                });
            }
            self.sources.push(file);
        }
        Ok(())
    }

    pub fn add_dependency(&mut self, name: impl Into<String>) {
        self.dependencies.push(name.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}

/// Ordered collection of modules plus the placeholder and auxiliary lists.
///
/// Registration enforces that a path belongs to at most one of the
/// placeholder set and any module's header or source list.
#[derive(Debug, Default)]
pub struct Registry {
    modules: Vec<Module>,
    empty_files: Vec<String>,
    auxiliary_sources: Vec<String>,
    claimed: HashSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module, claiming every one of its file paths.
    pub fn add_module(&mut self, module: Module) -> Result<()> {
        for path in module.headers.iter().chain(module.sources.iter()) {
            self.claim(path)?;
        }
        self.modules.push(module);
        Ok(())
    }

    /// Register placeholder paths.
    pub fn add_empty_files<I, S>(&mut self, files: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for file in files {
            let file = file.into();
            self.claim(&file)?;
            self.empty_files.push(file);
        }
        Ok(())
    }

    /// Register destination-native sources for the Makefile. These never
    /// enter the synchronized sets, so no claim is taken.
    pub fn add_auxiliary_sources<I, S>(&mut self, files: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.auxiliary_sources
            .extend(files.into_iter().map(Into::into));
    }

    fn claim(&mut self, path: &str) -> Result<()> {
        if !self.claimed.insert(path.to_string()) {
            return Err(Error::DuplicateFile {
                path: path.to_string(),
            });
        }
        Ok(())
    }

    /// Build a registry from a parsed catalog document.
    pub fn from_catalog(catalog: CatalogFile) -> Result<Self> {
        let mut registry = Self::new();
        registry.add_empty_files(catalog.empty_files)?;
        registry.add_auxiliary_sources(catalog.auxiliary_sources);
        for spec in catalog.modules {
            let mut module = Module::new(spec.name);
            module.add_header_files(spec.headers)?;
            module.add_source_files(spec.sources)?;
            for dep in spec.dependencies {
                module.add_dependency(dep);
            }
            registry.add_module(module)?;
        }
        Ok(registry)
    }

    /// Parse a TOML catalog document into a registry.
    pub fn parse(content: &str) -> Result<Self> {
        let catalog: CatalogFile = toml::from_str(content)?;
        Self::from_catalog(catalog)
    }

    /// The embedded libbsd catalog.
    pub fn embedded() -> Result<Self> {
        Self::parse(LIBBSD_CATALOG)
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn empty_files(&self) -> &[String] {
        &self.empty_files
    }

    pub fn auxiliary_sources(&self) -> &[String] {
        &self.auxiliary_sources
    }
}
