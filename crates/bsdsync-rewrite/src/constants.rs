//! Fixed path vocabulary of the vendored tree

/// Path segment prefixed to every upstream file inside the destination tree.
pub const VENDOR_PREFIX: &str = "freebsd";

/// Sub-namespace that collects all locally resolved (`#include "..."`)
/// headers once vendored.
pub const LOCAL_NAMESPACE: &str = "local";

/// Include namespaces owned by the destination project: the configuration
/// management namespace and the board support namespace. The forward chain's
/// first rule over-prefixes these; dedicated follow-up rules strip the
/// prefix back off.
pub const FIRST_PARTY_NAMESPACES: [&str; 2] = ["rtems", "bsp"];

/// Configuration header pulled in first by every vendored compilation unit.
pub const CONFIG_INCLUDE: &str = "#include <freebsd/machine/rtems-bsd-config.h>\n\n";

/// Entire content of a placeholder file.
pub const EMPTY_FILE_MARKER: &str = "/* EMPTY */\n";

/// Destination-native tree listed in the Makefile but never synchronized.
pub const NATIVE_TREE: &str = "rtemsbsd";
