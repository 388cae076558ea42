//! Kotlin reserved words.
//!
//! The only process-wide constant table in the crate. Package segments and
//! identifiers that collide with a hard keyword are escaped with backticks.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Kotlin hard keywords. Soft keywords are valid identifiers and need no escape.
static KOTLIN_KEYWORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
        "interface", "is", "null", "object", "package", "return", "super", "this", "throw",
        "true", "try", "typealias", "typeof", "val", "var", "when", "while",
    ]
    .into_iter()
    .collect()
});

/// Check whether `name` is a Kotlin hard keyword.
pub fn is_kotlin_keyword(name: &str) -> bool {
    KOTLIN_KEYWORDS.contains(name)
}
