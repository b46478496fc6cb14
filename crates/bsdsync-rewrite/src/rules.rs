//! Ordered regex rewrite chains
//!
//! A chain is a list of (pattern, replacement) rules applied to whole-file
//! content in declaration order. Order is load-bearing: the forward include
//! chain deliberately over-applies its first rule and corrects it with the
//! rules that follow, so the chain does not commute.

use regex::Regex;

/// One compiled rewrite step.
#[derive(Debug)]
pub struct RewriteRule {
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    /// Compile a rule. All patterns in this crate are fixed strings, so an
    /// invalid pattern is a defect, not a runtime condition.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("invalid rewrite pattern"),
            replacement: replacement.into(),
        }
    }

    /// Apply this rule to every match in `content`.
    pub fn apply(&self, content: &str) -> String {
        self.pattern
            .replace_all(content, self.replacement.as_str())
            .into_owned()
    }
}

/// An ordered rule list applied front to back.
#[derive(Debug)]
pub struct RuleChain {
    rules: Vec<RewriteRule>,
}

impl RuleChain {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// Run the whole chain over `content`.
    pub fn apply(&self, content: &str) -> String {
        self.rules
            .iter()
            .fold(content.to_string(), |data, rule| rule.apply(&data))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
