//! String helpers shared by the record codec and the matching engine.
//!
//! Case folding is ASCII-only throughout: non-ASCII bytes compare verbatim.

const WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

/// Strips leading and trailing spaces, tabs, CRs and LFs
pub fn trim(s: &str) -> &str {
    s.trim_matches(WHITESPACE)
}

/// Splits on `,`, trims every piece and drops the empty ones
///
/// Order and duplicates are preserved.
pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins items with `,` and no padding
pub fn join_csv<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(",")
}

pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.eq_ignore_ascii_case(b)
}

pub fn to_lower_ascii(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// True when `needle` occurs in `haystack`, ignoring ASCII case
///
/// An empty needle is contained in every haystack.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    to_lower_ascii(haystack).contains(&to_lower_ascii(needle))
}
