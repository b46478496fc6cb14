//! Contrib path transposition
//!
//! Third-party ("contrib") code inside the upstream tree is vendored one
//! directory level differently from first-party code: the vendor marker
//! moves from before the `contrib/<name>` layer to after it.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::VENDOR_PREFIX;

/// Matches `<prefix>/freebsd/contrib/<segment>/<rest>`. The lazy prefix
/// makes the leftmost contrib layer win should a path carry several.
static CONTRIB_LAYER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(.*?)({VENDOR_PREFIX}/)(contrib/\w+/)(.*)"))
        .expect("invalid contrib pattern")
});

/// Transpose the vendor marker past the contrib layer.
///
/// `x/freebsd/contrib/pf/net/pf.c` becomes `x/contrib/pf/freebsd/net/pf.c`;
/// paths without a matching contrib layer are returned unchanged.
pub fn map_contrib_path(path: &str) -> String {
    match CONTRIB_LAYER.captures(path) {
        Some(caps) => format!("{}{}{}{}", &caps[1], &caps[3], &caps[2], &caps[4]),
        None => path.to_string(),
    }
}
