//! Textual transformation grammar for the vendored tree
//!
//! Everything in this crate is pure text-in/text-out: the ordered include
//! rewrite chains, the contrib path transposition, and the fixed path
//! vocabulary they share. Filesystem routing lives in bsdsync-core.

pub mod constants;
pub mod contrib;
pub mod includes;
pub mod rules;

pub use constants::{
    CONFIG_INCLUDE, EMPTY_FILE_MARKER, FIRST_PARTY_NAMESPACES, LOCAL_NAMESPACE, NATIVE_TREE,
    VENDOR_PREFIX,
};
pub use contrib::map_contrib_path;
pub use includes::{
    FORWARD_RULES, REVERSE_RULES, fix_includes, is_first_party, revert_fix_includes,
};
pub use rules::{RewriteRule, RuleChain};
