//! Binary-level tests for the bsdsync CLI.

use assert_cmd::Command;
use assert_fs::prelude::*;
use bsdsync_test_utils::tree::TestTrees;
use predicates::prelude::*;

fn bsdsync() -> Command {
    Command::cargo_bin("bsdsync").expect("bsdsync binary not built")
}

#[test]
fn early_exit_prints_configuration_and_touches_nothing() {
    let trees = TestTrees::new();
    let before = trees.snapshot_dest();

    bsdsync()
        .args([
            "--freebsd",
            trees.upstream_root().to_str().unwrap(),
            "--rtems",
            trees.dest_root().to_str().unwrap(),
            "--early-exit",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Direction:              forward"))
        .stdout(predicate::str::contains("Early exit at user request"));

    assert_eq!(before, trees.snapshot_dest());
}

#[test]
fn missing_root_exits_with_configuration_status() {
    let trees = TestTrees::new();

    bsdsync()
        .args([
            "--freebsd",
            "/no/such/freebsd",
            "--rtems",
            trees.dest_root().to_str().unwrap(),
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("FreeBSD"));
}

#[test]
fn makefile_only_with_reverse_is_rejected() {
    let trees = TestTrees::new();

    bsdsync()
        .args([
            "--freebsd",
            trees.upstream_root().to_str().unwrap(),
            "--rtems",
            trees.dest_root().to_str().unwrap(),
            "--reverse",
            "--makefile",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("reverse"));
}

#[test]
fn forward_run_with_external_catalog_installs_files() {
    let upstream = assert_fs::TempDir::new().unwrap();
    upstream
        .child("net/if.c")
        .write_str("#include <sys/param.h>\n")
        .unwrap();
    let dest = assert_fs::TempDir::new().unwrap();
    let catalog = assert_fs::NamedTempFile::new("catalog.toml").unwrap();
    catalog
        .write_str("[[module]]\nname = \"net\"\nsources = [\"net/if.c\"]\n")
        .unwrap();

    bsdsync()
        .args([
            "--freebsd",
            upstream.path().to_str().unwrap(),
            "--rtems",
            dest.path().to_str().unwrap(),
            "--catalog",
            catalog.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating into"));

    dest.child("freebsd/net/if.c")
        .assert(predicate::str::contains("#include <freebsd/sys/param.h>"));
    dest.child("Makefile").assert(predicate::path::exists());
}

#[test]
fn invalid_external_catalog_is_a_configuration_error() {
    let trees = TestTrees::new();
    let catalog = assert_fs::NamedTempFile::new("catalog.toml").unwrap();
    catalog
        .write_str("[[module]]\nname = \"net\"\nsources = [\"net/if.h\"]\n")
        .unwrap();

    bsdsync()
        .args([
            "--freebsd",
            trees.upstream_root().to_str().unwrap(),
            "--rtems",
            trees.dest_root().to_str().unwrap(),
            "--catalog",
            catalog.path().to_str().unwrap(),
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not end in .c"));
}

#[test]
fn verbose_dry_run_echoes_intended_actions() {
    let upstream = assert_fs::TempDir::new().unwrap();
    upstream
        .child("net/if.c")
        .write_str("#include <sys/param.h>\n")
        .unwrap();
    let dest = assert_fs::TempDir::new().unwrap();
    let catalog = assert_fs::NamedTempFile::new("catalog.toml").unwrap();
    catalog
        .write_str("[[module]]\nname = \"net\"\nsources = [\"net/if.c\"]\n")
        .unwrap();

    bsdsync()
        .args([
            "--freebsd",
            upstream.path().to_str().unwrap(),
            "--rtems",
            dest.path().to_str().unwrap(),
            "--catalog",
            catalog.path().to_str().unwrap(),
            "--dry-run",
            "--verbose",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[dry-run] Would install source"));

    dest.child("freebsd").assert(predicate::path::missing());
}
