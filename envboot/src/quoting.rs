//! Quoting rules for scalars embedded in configuration text.

use crate::config::parser::parse_quoted_literal;

/// Characters that cannot appear in an unquoted configuration value.
pub const NOT_IN_UNQUOTED_TEXT: &str = "$\"{}[]:=,#`^?!@*&\\";

/// Returns true if `s` contains a character that forces quoting.
///
/// # Examples
///
/// ```
/// use envboot::quoting::needs_quotes;
///
/// assert!(!needs_quotes("localhost"));
/// assert!(needs_quotes("akka.tcp://Sys@localhost:9140"));
/// ```
#[must_use]
pub fn needs_quotes(s: &str) -> bool {
    s.chars().any(|c| NOT_IN_UNQUOTED_TEXT.contains(c)) || s.contains(['\n', '\r', '\t'])
}

/// Returns true if `s` is a single well-formed quoted literal.
///
/// Text that merely starts and ends with `"` (`"a" and "b"`, or `"C:\dir"`
/// with its unknown escape) is not quoted.
#[must_use]
pub fn is_quoted(s: &str) -> bool {
    parse_quoted_literal(s).is_some()
}

/// Wraps `s` in double quotes, escaping embedded quotes, backslashes and
/// line breaks so the parsed value is exactly `s`.
#[must_use]
pub fn add_quotes(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

/// Quotes `s` only when it needs it. A well-formed quoted literal is
/// returned as is, so applying this twice gives the same result as applying
/// it once.
///
/// # Examples
///
/// ```
/// use envboot::quoting::add_quotes_if_needed;
///
/// assert_eq!(add_quotes_if_needed("8080"), "8080");
/// assert_eq!(add_quotes_if_needed("a:b"), "\"a:b\"");
/// assert_eq!(add_quotes_if_needed("\"a:b\""), "\"a:b\"");
/// ```
#[must_use]
pub fn add_quotes_if_needed(s: &str) -> String {
    if is_quoted(s) || !needs_quotes(s) {
        s.to_string()
    } else {
        add_quotes(s)
    }
}
