//! DOT format utilities for graph serialization.
//!
//! This module provides the string-level helpers shared by the serializer:
//! escaping of quoted attribute values and quoting of entity identifiers.

use std::borrow::Cow;

/// Escapes a string for safe use inside a double-quoted DOT string.
///
/// Backslashes and double quotes are prefixed with a backslash; newline,
/// carriage return and tab are replaced by their backslash escape sequences.
/// Strings that need no escaping are returned borrowed.
///
/// # Arguments
///
/// * `s` - The string to escape
///
/// # Returns
///
/// The escaped string, borrowed if unchanged.
///
/// # Examples
///
/// ```rust
/// use dotscribe::utils::escape_dot;
///
/// let escaped = escape_dot("say \"hi\"");
/// assert_eq!(escaped, "say \\\"hi\\\"");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> Cow<'_, str> {
    if !s.contains(['\\', '"', '\n', '\r', '\t']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Wraps an entity identifier in double quotes, escaping its content.
#[must_use]
pub fn quote_id(id: &str) -> String {
    format!("\"{}\"", escape_dot(id))
}
