//! End-to-end synchronization scenarios over real temporary trees.

use bsdsync_core::{Direction, Registry, SyncConfig, SyncEngine};
use bsdsync_fs::NormalizedPath;
use bsdsync_rewrite::{CONFIG_INCLUDE, EMPTY_FILE_MARKER};
use bsdsync_test_utils::tree::TestTrees;

const CATALOG: &str = r#"
empty-files = ["ddb/ddb.h"]

auxiliary-sources = ["src/rtems-bsd-cam.c"]

[[module]]
name = "net"
headers = ["net/if_var.h"]
sources = ["net/if.c"]

[[module]]
name = "pf"
dependencies = ["net"]
headers = ["contrib/pf/net/pfvar.h"]
sources = ["contrib/pf/net/pf.c"]
"#;

const IF_C: &str = "#include <sys/param.h>\n#include \"opt_foo.h\"\n";
const IF_VAR_H: &str = "#ifndef _NET_IF_VAR_H_\n#include <sys/queue.h>\n#endif\n";
const PFVAR_H: &str = "#include <net/if_var.h>\n";
const PF_C: &str = "#include \"opt_pf.h\"\n";

fn populate_upstream(trees: &TestTrees) {
    trees.write_upstream("net/if.c", IF_C);
    trees.write_upstream("net/if_var.h", IF_VAR_H);
    trees.write_upstream("contrib/pf/net/pfvar.h", PFVAR_H);
    trees.write_upstream("contrib/pf/net/pf.c", PF_C);
    // Placeholder upstream content must be ignored entirely.
    trees.write_upstream("ddb/ddb.h", "upstream ddb content\n");
}

fn config(trees: &TestTrees, direction: Direction) -> SyncConfig {
    SyncConfig {
        source_root: NormalizedPath::new(trees.upstream_root()),
        dest_root: NormalizedPath::new(trees.dest_root()),
        direction,
        makefile_only: false,
        dry_run: false,
        verbose: false,
    }
}

fn run(config: &SyncConfig) -> bsdsync_core::SyncReport {
    let registry = Registry::parse(CATALOG).unwrap();
    SyncEngine::new(config, &registry).unwrap().run().unwrap()
}

#[test]
fn forward_install_rewrites_includes_in_order() {
    let trees = TestTrees::new();
    populate_upstream(&trees);

    run(&config(&trees, Direction::Forward));

    let expected = format!(
        "{CONFIG_INCLUDE}#include <freebsd/sys/param.h>\n#include <freebsd/local/opt_foo.h>\n"
    );
    assert_eq!(trees.read_dest("freebsd/net/if.c"), expected);
    assert_eq!(
        trees.read_dest("freebsd/net/if_var.h"),
        "#ifndef _NET_IF_VAR_HH_\n#include <freebsd/sys/queue.h>\n#endif\n"
    );
}

#[test]
fn forward_install_transposes_contrib_paths() {
    let trees = TestTrees::new();
    populate_upstream(&trees);

    run(&config(&trees, Direction::Forward));

    assert!(trees.dest_exists("contrib/pf/freebsd/net/pfvar.h"));
    assert!(trees.dest_exists("contrib/pf/freebsd/net/pf.c"));
    assert!(!trees.dest_exists("freebsd/contrib/pf/net/pfvar.h"));
}

#[test]
fn placeholder_content_is_the_marker_regardless_of_upstream() {
    let trees = TestTrees::new();
    populate_upstream(&trees);

    run(&config(&trees, Direction::Forward));

    assert_eq!(trees.read_dest("freebsd/ddb/ddb.h"), EMPTY_FILE_MARKER);
}

#[test]
fn reverse_reconstructs_the_upstream_layout() {
    let trees = TestTrees::new();
    populate_upstream(&trees);
    run(&config(&trees, Direction::Forward));

    // Wipe the upstream copies, then rebuild them from the vendored tree.
    for rel in [
        "net/if.c",
        "net/if_var.h",
        "contrib/pf/net/pfvar.h",
        "contrib/pf/net/pf.c",
    ] {
        std::fs::remove_file(trees.upstream_root().join(rel)).unwrap();
    }
    run(&config(&trees, Direction::Reverse));

    assert_eq!(trees.read_upstream("net/if.c"), IF_C);
    assert_eq!(trees.read_upstream("net/if_var.h"), IF_VAR_H);
    assert_eq!(trees.read_upstream("contrib/pf/net/pfvar.h"), PFVAR_H);
    assert_eq!(trees.read_upstream("contrib/pf/net/pf.c"), PF_C);
}

#[test]
fn rerunning_forward_leaves_timestamps_alone() {
    let trees = TestTrees::new();
    populate_upstream(&trees);
    let config = config(&trees, Direction::Forward);

    let first = run(&config);
    let installed = trees.dest_root().join("freebsd/net/if.c");
    let before = std::fs::metadata(&installed).unwrap().modified().unwrap();

    let second = run(&config);
    let after = std::fs::metadata(&installed).unwrap().modified().unwrap();

    assert_eq!(before, after);
    // Only the unconditional Makefile write repeats.
    assert!(first.actions.len() > second.actions.len());
    assert_eq!(second.actions.len(), 1);
}

#[test]
fn makefile_lists_vendored_and_native_sources() {
    let trees = TestTrees::new();
    populate_upstream(&trees);

    run(&config(&trees, Direction::Forward));

    let makefile = trees.read_dest("Makefile");
    assert!(makefile.contains("C_FILES = \\\n\tfreebsd/net/if.c"));
    assert!(makefile.contains(" \\\n\tcontrib/pf/freebsd/net/pf.c"));
    assert!(makefile.contains(" \\\n\trtemsbsd/src/rtems-bsd-cam.c"));
    assert!(makefile.contains("LIB = libbsd.a"));
}

#[test]
fn reverse_emits_no_makefile_and_skips_placeholders() {
    let trees = TestTrees::new();
    populate_upstream(&trees);
    run(&config(&trees, Direction::Forward));
    std::fs::remove_file(trees.upstream_root().join("ddb/ddb.h")).unwrap();
    std::fs::remove_file(trees.dest_root().join("Makefile")).unwrap();

    run(&config(&trees, Direction::Reverse));

    assert!(!trees.dest_exists("Makefile"));
    assert!(!trees.upstream_root().join("ddb/ddb.h").exists());
}

#[test]
fn dry_run_makes_zero_filesystem_mutations() {
    let trees = TestTrees::new();
    populate_upstream(&trees);
    let mut config = config(&trees, Direction::Forward);
    config.dry_run = true;
    let before = trees.snapshot_dest();

    let report = run(&config);

    assert_eq!(before, trees.snapshot_dest());
    assert!(!report.actions.is_empty());
    assert!(report.actions.iter().all(|a| a.starts_with("[dry-run]")));
}

#[test]
fn full_embedded_catalog_drives_a_dry_run() {
    let trees = TestTrees::new();
    let mut config = config(&trees, Direction::Forward);
    config.dry_run = true;
    let registry = Registry::embedded().unwrap();

    let report = SyncEngine::new(&config, &registry)
        .unwrap()
        .run()
        .unwrap();

    // Every placeholder, header, and source plus the Makefile is reported.
    let files: usize = registry
        .modules()
        .iter()
        .map(|m| m.headers().len() + m.sources().len())
        .sum();
    assert_eq!(
        report.actions.len(),
        registry.empty_files().len() + files + 1
    );
    assert_eq!(trees.snapshot_dest().len(), 0);
}
