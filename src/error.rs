use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LatencyError>;

#[derive(Error, Debug)]
pub enum LatencyError {
    #[error("No {0} value specified.")]
    MissingParameter(&'static str),
    #[error("Invalid date '{0}': dates must be formatted yyyy-MM-dd")]
    InvalidDateFormat(String),
    #[error("Malformed log line '{line}': {reason}")]
    MalformedLogLine { line: String, reason: &'static str },
    #[error("Failed to start '{program}': {source}")]
    ProcessLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{program}' did not finish within {timeout:?}")]
    ProcessTimeout { program: String, timeout: Duration },
    #[error("{}  {}", .problems.join("  "), .usage)]
    Validation { problems: Vec<String>, usage: &'static str },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LatencyError {
    pub fn malformed(line: &str, reason: &'static str) -> Self {
        LatencyError::MalformedLogLine {
            line: line.to_string(),
            reason,
        }
    }
}
