use crate::error::{LatencyError, Result};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-MM-dd` date, ignoring surrounding whitespace and quotes.
///
/// The shape is checked before chrono sees the string, since `%m` and `%d`
/// would otherwise accept single digits. Out-of-range months and days
/// (`2014-13-01`, `2014-02-30`) are rejected rather than rolled over.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = strip_quotes(input);
    if !has_date_shape(trimmed) {
        return Err(LatencyError::InvalidDateFormat(input.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| LatencyError::InvalidDateFormat(input.to_string()))
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn strip_quotes(input: &str) -> &str {
    input.trim_matches(|c: char| c == '"' || c.is_whitespace())
}

fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
