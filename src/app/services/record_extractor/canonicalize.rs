//! Header text canonicalization
//!
//! Normalizes raw header cell text into the canonical comparison key used
//! for lenient column-name matching: separator runs collapse to a single
//! underscore, the result is lowercased, and accented characters fold onto
//! their unaccented equivalents.

use crate::constants::{ACCENTED_CHARS, CANONICAL_CHARS, SEPARATOR_PATTERN};
use regex::Regex;
use std::sync::LazyLock;

static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SEPARATOR_PATTERN).expect("separator pattern is valid"));

/// Canonicalize a raw header string for lenient matching.
///
/// Runs of whitespace, dots, and parentheses collapse into a single
/// underscore; leading and trailing underscores are stripped; the result is
/// lowercased; accented characters are replaced one-to-one from the fixed
/// table. ASCII alphanumerics and underscores pass through untouched. The
/// function is pure and idempotent.
pub fn canonicalize(raw: &str) -> String {
    let collapsed = SEPARATOR_RUNS.replace_all(raw, "_");
    collapsed
        .trim_matches('_')
        .to_lowercase()
        .chars()
        .map(|ch| match ACCENTED_CHARS.iter().position(|&accented| accented == ch) {
            Some(index) => CANONICAL_CHARS[index],
            None => ch,
        })
        .collect()
}
