use crate::date::parse_date;
use crate::error::{LatencyError, Result};
use crate::model::CommitRecord;

const FIELD_SEPARATOR: char = '|';

/// Parse one `"%ad|%an|%s"` line into a commit record.
///
/// The date is everything before the first `|`; the rest of the line
/// (author and subject) is kept verbatim as the message.
pub fn parse_line(line: &str) -> Result<CommitRecord> {
    let body = unquote(line.trim());
    if body.is_empty() {
        return Err(LatencyError::malformed(line, "empty line"));
    }

    let (date_token, message) = body
        .split_once(FIELD_SEPARATOR)
        .ok_or_else(|| LatencyError::malformed(line, "no '|' after the date"))?;

    if date_token.trim().is_empty() {
        return Err(LatencyError::malformed(line, "missing date"));
    }

    let date = parse_date(date_token)?;
    Ok(CommitRecord::new(date, message))
}

/// Drop one pair of enclosing quotes, leaving quotes inside the subject alone.
fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}
