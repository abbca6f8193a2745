//! Term escaping and encoding for the `extended_filters` parameter.
//!
//! Every term is percent-encoded twice: the finished expression travels as a
//! single value inside an outer form-encoded request, and the search endpoint
//! decodes it once more after that layer has been stripped. Dataset terms are
//! the exception and are only encoded once; see
//! [`ExtendedFiltersBuilder::dataset_filter`](crate::ExtendedFiltersBuilder::dataset_filter).
//!
//! Encoding is form style: ASCII alphanumerics and `-_.` pass through, a
//! space becomes `+`, every other byte (including `~` and `*`) becomes `%XX`.

use crate::error::{Result, SubqueryDefect};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

/// Bytes left untouched by [`urlencode`]; the space is handled separately.
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Operator substrings whose presence marks a value as a literal sub-query.
pub const OPERATOR_TOKENS: [&str; 3] = [" OR ", " AND ", " NOT "];

/// Characters whose presence marks a value as a literal sub-query.
///
/// `:` is deliberately absent here but present in [`ESCAPED_CHARS`].
pub const RESERVED_CHARS: &[char] = &[
    '\\', '+', '-', '&', '|', '!', '(', ')', '{', '}', '[', ']', '^', '~', '*', '?', '"', ';', ' ',
];

/// Characters prefixed with a backslash by [`escape`].
pub const ESCAPED_CHARS: &[char] = &[
    '\\', '+', '-', '&', '|', '!', '(', ')', '{', '}', '[', ']', '^', '~', '*', '?', ':', '"', ';',
    ' ',
];

/// Marker placed between the attribute and `:` when the value is a URI.
pub const URI_MARKER: &str = "[uri]";

/// Percent-encode `input` once, form style (space as `+`).
pub fn urlencode(input: &str) -> String {
    utf8_percent_encode(input, FORM_ENCODE_SET)
        .map(|chunk| if chunk == "%20" { "+" } else { chunk })
        .collect()
}

/// Percent-encode `input` twice in sequence.
pub fn double_encode(input: &str) -> String {
    urlencode(&urlencode(input))
}

/// Reverse one layer of [`urlencode`].
pub fn urldecode(input: &str) -> Result<String> {
    let spaced = input.replace('+', " ");
    let decoded = percent_decode_str(&spaced).decode_utf8()?;
    Ok(decoded.into_owned())
}

/// Wrap `input` in literal double quotes.
pub fn quote(input: &str) -> String {
    format!("\"{input}\"")
}

/// Whether `value` contains an operator substring or a reserved character.
pub fn contains_reserved(value: &str) -> bool {
    OPERATOR_TOKENS.iter().any(|op| value.contains(op)) || value.contains(RESERVED_CHARS)
}

/// Prefix every character of [`ESCAPED_CHARS`] in `value` with a backslash.
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(ESCAPED_CHARS) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() * 2);
    for c in value.chars() {
        if ESCAPED_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

/// Whether `value` is sent as a raw sub-query instead of being escaped.
///
/// A non-URI value containing any reserved token is assumed to be query
/// syntax supplied on purpose (`cancer AND NOT (breast OR ovarian)`). This
/// also catches values that merely contain such text as data.
pub fn is_raw_subquery(value: &str, value_is_uri: bool) -> bool {
    !value_is_uri && contains_reserved(value)
}

/// Encode one attribute/value term.
///
/// Produces `DENC(attribute) ["[uri]"] ":" DENC(value)`, where the value is
/// backslash-escaped first unless [`is_raw_subquery`] holds.
pub fn encode_term(attribute: &str, value: &str, value_is_uri: bool) -> String {
    let value = if is_raw_subquery(value, value_is_uri) {
        Cow::Borrowed(value)
    } else {
        escape(value)
    };

    let mut term = double_encode(attribute);
    if value_is_uri {
        term.push_str(URI_MARKER);
    }
    term.push(':');
    term.push_str(&double_encode(&value));
    term
}

/// Check that a raw sub-query has balanced parentheses and closed quotes.
///
/// Backslash escapes the next character; parentheses inside quotes are text.
pub fn validate_subquery(value: &str) -> std::result::Result<(), SubqueryDefect> {
    let mut depth = 0usize;
    let mut quoted = false;
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '"' => quoted = !quoted,
            '(' if !quoted => depth += 1,
            ')' if !quoted => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(SubqueryDefect::UnbalancedParentheses)?;
            }
            _ => {}
        }
    }

    if quoted {
        Err(SubqueryDefect::UnterminatedQuote)
    } else if depth > 0 {
        Err(SubqueryDefect::UnbalancedParentheses)
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
