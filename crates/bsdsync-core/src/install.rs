//! Per-file installation and reversion
//!
//! Three file categories, each with a forward operation and (placeholders
//! excepted) a reverse one. Every file is processed independently; a
//! missing upstream file or a failed write aborts the run.

use bsdsync_fs::{NormalizedPath, read_text, write_atomic, write_if_changed};
use bsdsync_rewrite::{
    CONFIG_INCLUDE, EMPTY_FILE_MARKER, VENDOR_PREFIX, fix_includes, is_first_party,
    map_contrib_path, revert_fix_includes,
};

use crate::Result;
use crate::config::SyncConfig;

/// Installs and reverts individual files under one run configuration.
pub struct FileInstaller<'a> {
    config: &'a SyncConfig,
}

impl<'a> FileInstaller<'a> {
    pub fn new(config: &'a SyncConfig) -> Self {
        Self { config }
    }

    /// Vendored location of an upstream-relative path: under the vendor
    /// marker, with the contrib layer transposed.
    fn vendored_path(&self, rel: &str) -> NormalizedPath {
        let dst = self.config.dest_root.join(VENDOR_PREFIX).join(rel);
        NormalizedPath::new(map_contrib_path(dst.as_str()))
    }

    fn upstream_path(&self, rel: &str) -> NormalizedPath {
        self.config.source_root.join(rel)
    }

    /// Forward-install a placeholder. Content is the fixed marker; an
    /// existing identical file is left untouched.
    pub fn install_empty(&self, rel: &str) -> Result<Option<String>> {
        let dst = self.vendored_path(rel);
        if self.config.dry_run {
            return Ok(Some(format!("[dry-run] Would install empty {dst}")));
        }
        if write_if_changed(&dst, EMPTY_FILE_MARKER.as_bytes())?.is_changed() {
            tracing::debug!(%dst, "installed placeholder");
            return Ok(Some(format!("Install empty - {dst}")));
        }
        Ok(None)
    }

    /// Forward-install a header file.
    pub fn install_header(&self, rel: &str) -> Result<Option<String>> {
        self.install(rel, FileKind::Header)
    }

    /// Forward-install a source file. Rewritten sources additionally gain
    /// the configuration include as their first line.
    pub fn install_source(&self, rel: &str) -> Result<Option<String>> {
        self.install(rel, FileKind::Source)
    }

    fn install(&self, rel: &str, kind: FileKind) -> Result<Option<String>> {
        let src = self.upstream_path(rel);
        let dst = self.vendored_path(rel);
        if self.config.dry_run {
            return Ok(Some(format!(
                "[dry-run] Would install {kind} {src} => {dst}"
            )));
        }
        let mut data = read_text(&src)?;
        if !is_first_party(rel) {
            data = fix_includes(&data);
            if kind == FileKind::Source {
                data.insert_str(0, CONFIG_INCLUDE);
            }
        }
        if write_if_changed(&dst, data.as_bytes())?.is_changed() {
            tracing::debug!(%src, %dst, kind = %kind, "installed");
            return Ok(Some(format!("Install {kind} - {src} => {dst}")));
        }
        Ok(None)
    }

    /// Revert a header back to the upstream layout.
    pub fn revert_header(&self, rel: &str) -> Result<Option<String>> {
        self.revert(rel, FileKind::Header)
    }

    /// Revert a source back to the upstream layout, stripping the
    /// configuration include the forward pass prepended.
    pub fn revert_source(&self, rel: &str) -> Result<Option<String>> {
        self.revert(rel, FileKind::Source)
    }

    fn revert(&self, rel: &str, kind: FileKind) -> Result<Option<String>> {
        let src = self.vendored_path(rel);
        let dst = self.upstream_path(rel);
        if self.config.dry_run {
            return Ok(Some(format!(
                "[dry-run] Would revert {kind} {src} => {dst}"
            )));
        }
        let mut data = read_text(&src)?;
        if !is_first_party(rel) {
            if kind == FileKind::Source {
                data = data.replacen(CONFIG_INCLUDE, "", 1);
            }
            data = revert_fix_includes(&data);
        }
        // Reverse is a one-shot export, not an incremental sync: write
        // unconditionally.
        write_atomic(&dst, data.as_bytes())?;
        tracing::debug!(%src, %dst, kind = %kind, "reverted");
        Ok(Some(format!("Revert {kind} - {src} => {dst}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Header,
    Source,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::Source => write!(f, "source"),
        }
    }
}
