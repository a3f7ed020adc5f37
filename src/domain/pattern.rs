use std::sync::LazyLock;

use regex::Regex;

/// Source of the canonical Roman numeral grammar.
///
/// A numeral is a thousands group (`M` up to three times) followed by a
/// hundreds, a tens and a units group. Each group uses its own symbol triple,
/// e.g. the hundreds group is one of `"", C, CC, CCC, CD, D, DC, DCC, DCCC,
/// CM`.
///
/// Each of the four alternatives requires a different group to be non-empty,
/// so the empty string never matches.
pub const PATTERN: &str = concat!(
    "^(?:",
    "M{1,3}(?:CM|CD|D?C{0,3})(?:XC|XL|L?X{0,3})(?:IX|IV|V?I{0,3})",
    "|M{0,3}(?:CM|C?D|D?C{1,3})(?:XC|XL|L?X{0,3})(?:IX|IV|V?I{0,3})",
    "|M{0,3}(?:CM|CD|D?C{0,3})(?:XC|X?L|L?X{1,3})(?:IX|IV|V?I{0,3})",
    "|M{0,3}(?:CM|CD|D?C{0,3})(?:XC|XL|L?X{0,3})(?:IX|I?V|V?I{1,3})",
    ")$",
);

static COMPILED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PATTERN).expect("the numeral grammar is a valid regex"));

/// Returns the compiled numeral grammar.
///
/// The pattern is compiled on first use and shared afterwards.
#[must_use]
pub fn pattern() -> &'static Regex {
    &COMPILED
}

/// Checks whether `s` is a Roman numeral in canonical form.
///
/// # Examples
///
/// ```
/// assert!(roman::is_valid("MCMXCIV"));
/// assert!(!roman::is_valid("IIII"));
/// assert!(!roman::is_valid("mcmxciv"));
/// ```
#[must_use]
pub fn is_valid(s: &str) -> bool {
    pattern().is_match(s)
}
