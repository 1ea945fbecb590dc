//! Lenient Content-Disposition filename capture.

use super::percent::{percent_decode, PercentDecodeError};

/// Extracts the filename suggested by a raw `Content-Disposition` value.
///
/// The capture is deliberately lenient, mirroring what browsers accept in the
/// wild: the literal `filename`, a run of characters other than `;`, `=`, or
/// a newline, `=`, an optional quote, then the value up to the closing quote
/// or line end. `Ok(None)` means no parameter was found. Malformed
/// percent-encoding in a found value is an error for the caller to handle.
pub fn filename_from_content_disposition(
    header_value: &str,
) -> Result<Option<String>, PercentDecodeError> {
    match capture_filename_param(header_value) {
        Some(raw) => percent_decode(raw).map(Some),
        None => Ok(None),
    }
}

/// Finds the raw (still percent-encoded) filename parameter value.
fn capture_filename_param(value: &str) -> Option<&str> {
    let mut from = 0;
    while let Some(found) = value[from..].find("filename") {
        let start = from + found;
        if let Some(raw) = capture_value_at(&value[start + "filename".len()..]) {
            return Some(raw);
        }
        from = start + 1;
    }
    None
}

/// Matches `[^;=\n]*=` followed by an optionally-quoted value at the head of
/// `rest`. A quoted value must be closed by its opening quote; when it is
/// not, the quote degrades to part of the surrounding text and the capture is
/// empty, the same way a backtracking matcher resolves it.
fn capture_value_at(rest: &str) -> Option<&str> {
    let stop = rest.find(|c| matches!(c, ';' | '=' | '\n'))?;
    if !rest[stop..].starts_with('=') {
        return None;
    }
    let after_eq = &rest[stop + 1..];
    let (quote, body) = match after_eq.chars().next() {
        Some(q @ ('\'' | '"')) => (Some(q), &after_eq[1..]),
        _ => (None, after_eq),
    };
    let end = body
        .find(|c| matches!(c, '\'' | '"' | '\n'))
        .unwrap_or(body.len());
    match quote {
        None => Some(&body[..end]),
        Some(q) if body[end..].starts_with(q) => Some(&body[..end]),
        Some(_) => Some(&after_eq[..0]),
    }
}
