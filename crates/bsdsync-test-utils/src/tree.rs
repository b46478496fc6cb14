//! Paired temporary source and destination trees for sync scenarios.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary upstream tree and destination tree with helper methods for
/// test setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use bsdsync_test_utils::tree::TestTrees;
///
/// let trees = TestTrees::new();
/// trees.write_upstream("net/if.c", "#include <sys/param.h>\n");
/// assert!(!trees.dest_exists("freebsd/net/if.c"));
/// ```
pub struct TestTrees {
    upstream: TempDir,
    dest: TempDir,
}

impl Default for TestTrees {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTrees {
    /// Create a pair of empty temporary directories.
    pub fn new() -> Self {
        Self {
            upstream: TempDir::new().expect("TestTrees: failed to create upstream dir"),
            dest: TempDir::new().expect("TestTrees: failed to create dest dir"),
        }
    }

    /// Root of the temporary upstream tree.
    pub fn upstream_root(&self) -> &Path {
        self.upstream.path()
    }

    /// Root of the temporary destination tree.
    pub fn dest_root(&self) -> &Path {
        self.dest.path()
    }

    /// Write a file under the upstream root, creating parent directories.
    pub fn write_upstream(&self, rel: &str, content: &str) {
        write_file(&self.upstream.path().join(rel), content);
    }

    /// Write a file under the destination root, creating parent directories.
    pub fn write_dest(&self, rel: &str, content: &str) {
        write_file(&self.dest.path().join(rel), content);
    }

    /// Read an upstream file as text.
    pub fn read_upstream(&self, rel: &str) -> String {
        fs::read_to_string(self.upstream.path().join(rel))
            .expect("TestTrees: upstream file missing")
    }

    /// Read a destination file as text.
    pub fn read_dest(&self, rel: &str) -> String {
        fs::read_to_string(self.dest.path().join(rel))
            .expect("TestTrees: destination file missing")
    }

    /// Whether a destination file exists.
    pub fn dest_exists(&self, rel: &str) -> bool {
        self.dest.path().join(rel).exists()
    }

    /// Snapshot the destination tree as relative path -> content bytes.
    ///
    /// Two snapshots taken around a dry run must compare equal.
    pub fn snapshot_dest(&self) -> BTreeMap<PathBuf, Vec<u8>> {
        let mut entries = BTreeMap::new();
        collect(self.dest.path(), self.dest.path(), &mut entries);
        entries
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("TestTrees: failed to create directories");
    }
    fs::write(path, content).expect("TestTrees: failed to write file");
}

fn collect(root: &Path, dir: &Path, entries: &mut BTreeMap<PathBuf, Vec<u8>>) {
    let Ok(read) = fs::read_dir(dir) else {
        return;
    };
    for entry in read.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(root, &path, entries);
        } else {
            let rel = path
                .strip_prefix(root)
                .expect("TestTrees: entry outside root")
                .to_path_buf();
            let bytes = fs::read(&path).expect("TestTrees: failed to read snapshot entry");
            entries.insert(rel, bytes);
        }
    }
}
