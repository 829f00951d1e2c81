//! Locale-style ordering for logical paths.
//!
//! Approximates root-locale collation for the ASCII-heavy strings found in
//! page paths: punctuation sorts before digits, digits before letters, and
//! letters compare case-insensitively. Exact ties fall back to lowercase
//! before uppercase, then code point order.
//!
//! ASCII punctuation and symbols follow the root collation order, so
//! `user_center` < `user-x` < `user/index` < `user1`.

use std::cmp::Ordering;

/// Whitespace, punctuation and symbols in root collation order.
const SYMBOL_ORDER: &str = "\t\n\x0B\x0C\r _-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

fn symbol_rank(c: char) -> u32 {
    match SYMBOL_ORDER.chars().position(|s| s == c) {
        Some(rank) => rank as u32,
        // Other symbols after the known ones, in code point order
        None => SYMBOL_ORDER.len() as u32 + c as u32,
    }
}

fn primary_key(c: char) -> (u8, u32) {
    if c.is_alphabetic() {
        (2, c.to_lowercase().next().unwrap_or(c) as u32)
    } else if c.is_numeric() {
        (1, c as u32)
    } else {
        (0, symbol_rank(c))
    }
}

fn case_key(c: char) -> u8 {
    if c.is_uppercase() { 1 } else { 0 }
}

/// Compare two strings the way a locale-aware sort orders them.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_key)
        .cmp(b.chars().map(primary_key))
        .then_with(|| a.chars().map(case_key).cmp(b.chars().map(case_key)))
        .then_with(|| a.cmp(b))
}
