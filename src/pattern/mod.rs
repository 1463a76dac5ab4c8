//! Pattern primitives for the discrimination network.
//!
//! A pattern is an ordered sequence of discrete symbols, optionally ending
//! in the reserved terminator symbol that marks the pattern as complete.
//! The functions here are pure and total; they encode the network's notion
//! of partial sequence matching with terminator-sensitive exactness.

/// A single discrete symbol within a pattern.
pub type Symbol = String;

/// Reserved symbol meaning "pattern ends here".
pub const TERMINATOR: &str = "$";

/// Returns true if `symbol` is the reserved end-of-pattern marker.
#[inline]
pub fn is_terminator(symbol: &str) -> bool {
    symbol == TERMINATOR
}

/// Returns true if the pattern's last symbol is the terminator.
#[inline]
pub fn ends_with_terminator(pattern: &[Symbol]) -> bool {
    matches!(pattern.last(), Some(last) if is_terminator(last))
}

/// Builds an owned pattern from string slices.
pub fn pattern_of(units: &[&str]) -> Vec<Symbol> {
    units.iter().map(|unit| (*unit).to_string()).collect()
}

/// Compares two patterns, ignoring a single trailing terminator on either.
pub fn patterns_equal(a: &[Symbol], b: &[Symbol]) -> bool {
    strip_terminator(a) == strip_terminator(b)
}

/// Prefix match of `test` against `pattern`.
///
/// A terminator-ended test only matches a pattern of exactly the same
/// length that is itself terminator-ended. Any other test matches when it
/// is no longer than `pattern` and equals the corresponding prefix.
pub fn pattern_matches(test: &[Symbol], pattern: &[Symbol]) -> bool {
    if ends_with_terminator(test) {
        if test.len() != pattern.len() || !ends_with_terminator(pattern) {
            return false;
        }
    } else if test.len() > pattern.len() {
        return false;
    }
    test == &pattern[..test.len()]
}

/// Suffix of `a` starting at the first position where it diverges from `b`
/// (or where `b` runs out). Empty when `a` is a prefix of `b` or equal.
pub fn pattern_diff(a: &[Symbol], b: &[Symbol]) -> Vec<Symbol> {
    for i in 0..a.len() {
        if i >= b.len() || a[i] != b[i] {
            return a[i..].to_vec();
        }
    }
    Vec::new()
}

/// First symbol of `pattern` as a one-unit pattern; empty when the pattern
/// is empty or opens with the terminator.
pub fn first_unit(pattern: &[Symbol]) -> Vec<Symbol> {
    match pattern.first() {
        Some(first) if !is_terminator(first) => vec![first.clone()],
        _ => Vec::new(),
    }
}

#[inline]
fn strip_terminator(pattern: &[Symbol]) -> &[Symbol] {
    if ends_with_terminator(pattern) {
        &pattern[..pattern.len() - 1]
    } else {
        pattern
    }
}
