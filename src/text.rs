//! Shared string-cleaning helpers used by all three formatters.
//!
//! Every transform in this crate is total over arbitrary string input, and
//! these helpers are where the blanks get normalized: values are trimmed,
//! blank lines are dropped, and absent fields collapse to "".

/// Trim a raw field value.
pub fn clean(s: &str) -> &str {
    s.trim()
}

/// Substitute a placeholder when the value is blank.
///
/// This is how every optional field gets its documented default, so
/// output is always a complete document even with all fields empty.
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() { placeholder } else { value }
}

/// Split a multi-line field into trimmed, non-blank lines.
///
/// Input order is preserved. Handles both `\n` and `\r\n` line endings.
pub fn non_blank_lines(s: &str) -> Vec<&str> {
    s.lines().map(str::trim).filter(|line| !line.is_empty()).collect()
}

/// Split a labels field on commas or newlines into discrete tokens.
///
/// Tokens are trimmed, blanks are dropped, and the comma-split order
/// is preserved.
pub fn split_labels(s: &str) -> Vec<&str> {
    s.split([',', '\n']).map(str::trim).filter(|token| !token.is_empty()).collect()
}
