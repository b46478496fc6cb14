//! Makefile generation for the vendored tree
//!
//! The Makefile is a fixed template parameterized by the source-file list.
//! It is fully regenerated text, never merged with a previous version, and
//! emitted only on the forward path.

use bsdsync_fs::write_atomic;
use bsdsync_rewrite::{NATIVE_TREE, VENDOR_PREFIX, map_contrib_path};

use crate::Result;
use crate::catalog::Registry;
use crate::config::SyncConfig;

const PROLOGUE: &str = concat!(
    "include config.inc\n",
    "\n",
    "include $(RTEMS_MAKEFILE_PATH)/Makefile.inc\n",
    "include $(RTEMS_CUSTOM)\n",
    "include $(PROJECT_ROOT)/make/leaf.cfg\n",
    "\n",
    "CFLAGS += -ffreestanding \n",
    "CFLAGS += -I . \n",
    "CFLAGS += -I rtemsbsd \n",
    "CFLAGS += -I contrib/altq \n",
    "CFLAGS += -I contrib/pf \n",
    "CFLAGS += -B $(INSTALL_BASE) \n",
    "CFLAGS += -w \n",
    "CFLAGS += -std=gnu99\n",
    "\n",
);

const RECIPES: &str = concat!(
    "\n",
    "C_O_FILES = $(C_FILES:%.c=%.o)\n",
    "C_DEP_FILES = $(C_FILES:%.c=%.dep)\n",
    "\n",
    "LIB = libbsd.a\n",
    "\n",
    "all: lib_usb\n",
    "\n",
    "$(LIB): $(C_O_FILES)\n",
    "\t$(AR) rcu $@ $^\n",
    "\n",
    "lib_usb:\n",
    "\tmake $(LIB)\n",
    "\n",
    "install: $(LIB)\n",
    "\tinstall -d $(INSTALL_BASE)/include\n",
    "\tinstall -c -m 644 $(LIB) $(INSTALL_BASE)\n",
    "\tcd rtemsbsd; for i in `find . -name '*.h'` ; do \\\n",
    "\t  install -c -m 644 -D \"$$i\" \"$(INSTALL_BASE)/include/$$i\" ; done\n",
    "\tfor i in `find contrib freebsd -name '*.h'` ; do \\\n",
    "\t  install -c -m 644 -D \"$$i\" \"$(INSTALL_BASE)/include/$$i\" ; done\n",
    "\n",
    "clean:\n",
    "\trm -f -r $(PROJECT_INCLUDE)/rtems/freebsd\n",
    "\trm -f $(LIB) $(C_O_FILES) $(C_DEP_FILES)\n",
    "\n",
    "-include $(C_DEP_FILES)\n",
);

/// Render the complete Makefile text for a registry.
///
/// The `C_FILES` list holds every module source, vendor-prefixed and
/// contrib-mapped, followed by the destination-native auxiliary sources.
pub fn render(registry: &Registry) -> String {
    let mut data = String::from(PROLOGUE);
    data.push_str("C_FILES =");
    for module in registry.modules() {
        for file in module.sources() {
            let vendored = map_contrib_path(&format!("{VENDOR_PREFIX}/{file}"));
            data.push_str(" \\\n\t");
            data.push_str(&vendored);
        }
    }
    for file in registry.auxiliary_sources() {
        data.push_str(" \\\n\t");
        data.push_str(NATIVE_TREE);
        data.push('/');
        data.push_str(file);
    }
    data.push_str(RECIPES);
    data
}

/// Write the Makefile at the destination root, honoring dry-run.
pub fn write(config: &SyncConfig, registry: &Registry) -> Result<Option<String>> {
    let path = config.dest_root.join("Makefile");
    if config.dry_run {
        return Ok(Some(format!("[dry-run] Would create {path}")));
    }
    write_atomic(&path, render(registry).as_bytes())?;
    tracing::debug!(%path, "created Makefile");
    Ok(Some(format!("Create Makefile - {path}")))
}
