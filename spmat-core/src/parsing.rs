//! Parsing utilities for the coordinate-list matrix text format
//!
//! ```text
//! rows=<int>
//! cols=<int>
//! (<row>,<col>,<value>)
//! ...
//! ```
//!
//! These are pure functions over single lines with no I/O dependencies.
//! Errors carry the 1-based line number supplied by the caller.

use crate::{Entry, FormatErrorKind, SpmatError};
use alloc::string::String;

/// Parse a dimension header line of the form `<prefix><int>`
///
/// The prefix must match exactly (`rows=` or `cols=`) and the remainder must
/// be a non-negative integer with nothing after it.
pub fn parse_header_line(line: &str, prefix: &str, line_no: usize) -> Result<usize, SpmatError> {
    let bad = SpmatError::format(line_no, FormatErrorKind::BadHeader);

    let digits = line.strip_prefix(prefix).ok_or(bad)?;
    parse_unsigned(digits).ok_or(bad)
}

/// Parse an entry line of the form `(<row>,<col>,<value>)`
///
/// All whitespace is removed before matching, so `( 1 , 2 , -3 )` is
/// accepted. A blank line does not match.
pub fn parse_entry_line(line: &str, line_no: usize) -> Result<Entry, SpmatError> {
    let bad = SpmatError::format(line_no, FormatErrorKind::BadEntry);

    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    let inner = compact
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(bad)?;

    let mut fields = inner.split(',');
    let (Some(row), Some(col), Some(value), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(bad);
    };

    let row = parse_signed(row).ok_or(bad)?;
    let col = parse_signed(col).ok_or(bad)?;
    let value = parse_signed(value).ok_or(bad)?;

    let negative = SpmatError::format(line_no, FormatErrorKind::NegativeIndex);
    let row = usize::try_from(row).map_err(|_| negative)?;
    let col = usize::try_from(col).map_err(|_| negative)?;

    Ok(Entry::new(row, col, value))
}

/// Parse an optionally signed decimal integer
fn parse_signed(s: &str) -> Option<i64> {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse an unsigned decimal integer (digits only, no sign)
fn parse_unsigned(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
