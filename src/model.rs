use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;

pub const SCHEMA_VERSION: u32 = 1;

/// One non-merge commit as reported by `git log`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRecord {
    pub date: NaiveDate,
    pub message: String,
}

impl CommitRecord {
    pub fn new(date: NaiveDate, message: impl Into<String>) -> Self {
        Self {
            date,
            message: message.into(),
        }
    }

    /// Signed whole days from this commit to `release`.
    pub fn days_until(&self, release: NaiveDate) -> i64 {
        (release - self.date).num_days()
    }

    pub fn author(&self) -> &str {
        self.message.split_once('|').map_or(self.message.as_str(), |(a, _)| a)
    }

    pub fn subject(&self) -> &str {
        self.message.split_once('|').map_or("", |(_, s)| s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRange {
    pub from: String,
    pub to: String,
}

impl LogRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn revision_spec(&self) -> String {
        format!("{}..{}", self.from, self.to)
    }
}

impl fmt::Display for LogRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.revision_spec())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub commit_count: usize,
    pub total_days: i64,
    pub average_days: f64,
}

impl Summary {
    pub fn empty() -> Self {
        Self {
            commit_count: 0,
            total_days: 0,
            average_days: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LatencyEntry {
    pub date: NaiveDate,
    pub days_until: i64,
    pub author: String,
    pub subject: String,
    pub message: String,
}

impl LatencyEntry {
    pub fn from_record(record: &CommitRecord, release: NaiveDate) -> Self {
        Self {
            date: record.date,
            days_until: record.days_until(release),
            author: record.author().to_string(),
            subject: record.subject().to_string(),
            message: record.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LatencyOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub last_branch: String,
    pub this_branch: String,
    pub release_date: NaiveDate,
    pub command: String,
    pub precise: bool,
    pub summary: Summary,
    pub entries: Vec<LatencyEntry>,
}
