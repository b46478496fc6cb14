//! Forward and inverse `#include` transforms
//!
//! Forward rewriting makes a vendored file compile standalone: system
//! includes gain the vendor prefix, local includes are routed into the
//! `local` namespace, and header guards are mangled so upstream and
//! destination guards sharing a name cannot collide. The reverse chain is
//! the exact left inverse of the forward chain on its output, applied in
//! the opposite order.
//!
//! Single application only: re-running the forward chain on its own output
//! double-prefixes system includes. Callers must guarantee the input does
//! not already contain `_HH_` or a vendor-prefixed include.

use std::sync::LazyLock;

use crate::constants::{FIRST_PARTY_NAMESPACES, LOCAL_NAMESPACE, VENDOR_PREFIX};
use crate::rules::{RewriteRule, RuleChain};

/// Forward rule chain.
///
/// Rule 1 prefixes every system include, which is over-eager on the
/// first-party namespaces; one follow-up rule per namespace strips the
/// prefix back off, so rule 1 must run first.
pub static FORWARD_RULES: LazyLock<RuleChain> = LazyLock::new(|| {
    let mut rules = vec![RewriteRule::new(
        r"#([ \t]*)include <",
        format!("#${{1}}include <{VENDOR_PREFIX}/"),
    )];
    for namespace in FIRST_PARTY_NAMESPACES {
        rules.push(RewriteRule::new(
            &format!("#include <{VENDOR_PREFIX}/{namespace}"),
            format!("#include <{namespace}"),
        ));
    }
    rules.push(RewriteRule::new(
        r#"#include "([^"]*)""#,
        format!("#include <{VENDOR_PREFIX}/{LOCAL_NAMESPACE}/${{1}}>"),
    ));
    rules.push(RewriteRule::new("_H_", "_HH_"));
    RuleChain::new(rules)
});

/// Inverse chain, in the opposite order of [`FORWARD_RULES`].
pub static REVERSE_RULES: LazyLock<RuleChain> = LazyLock::new(|| {
    RuleChain::new(vec![
        RewriteRule::new("_HH_", "_H_"),
        RewriteRule::new(
            &format!("#include <{VENDOR_PREFIX}/{LOCAL_NAMESPACE}/([^>]*)>"),
            "#include \"${1}\"",
        ),
        RewriteRule::new(
            &format!(r"#([ \t]*)include <{VENDOR_PREFIX}/"),
            "#${1}include <",
        ),
    ])
});

/// Rewrite whole-file content for standalone compilation under the vendor
/// tree.
pub fn fix_includes(content: &str) -> String {
    FORWARD_RULES.apply(content)
}

/// Undo [`fix_includes`] on its output.
pub fn revert_fix_includes(content: &str) -> String {
    REVERSE_RULES.apply(content)
}

/// First-party files are routed by path, never by content: a relative path
/// containing the `rtems` marker is exempt from both transforms.
pub fn is_first_party(rel_path: &str) -> bool {
    rel_path.contains("rtems")
}
