//! Tokenizer for command lines.
//!
//! Splits a line on a caller-supplied set of single-character delimiters.
//! A run of delimiters counts as one separator, so the output never contains
//! empty tokens. There is no quoting or escaping.

/// Delimiter used when the caller does not supply one.
pub const DEFAULT_DELIMITER: &str = " ";

/// Returns the delimiter set to use, falling back to [`DEFAULT_DELIMITER`]
/// when `delimiters` is absent or empty.
pub fn effective_delimiters(delimiters: Option<&str>) -> &str {
    match delimiters {
        Some(d) if !d.is_empty() => d,
        _ => DEFAULT_DELIMITER,
    }
}

/// Tokenizes `input`, treating every character of `delimiters` as a separator.
///
/// - `"c::4"` on `":"` → `["c", "4"]`
/// - `":c:4:::"` on `":"` → `["c", "4"]`
/// - `"::::"` on `":"` → `[]`
///
/// An empty `delimiters` string means [`DEFAULT_DELIMITER`]. Tokens borrow
/// from `input`.
pub fn tokenize<'a>(input: &'a str, delimiters: &str) -> Vec<&'a str> {
    let delimiters = effective_delimiters(Some(delimiters));

    input
        .split(|c: char| delimiters.contains(c))
        .filter(|token| !token.is_empty())
        .collect()
}
