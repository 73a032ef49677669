use crate::date::parse_date;
use crate::error::{LatencyError, Result};
use crate::model::LogRange;
use chrono::NaiveDate;

pub const USAGE: &str =
    "Usage:  daystorelease -DlastBranch=release_14_2_1 -DthisBranch=HEAD -DreleaseDate=2014-03-20";

pub const LAST_BRANCH: &str = "lastBranch";
pub const THIS_BRANCH: &str = "thisBranch";
pub const RELEASE_DATE: &str = "releaseDate";

/// Raw, unchecked parameters as the build tool handed them over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseParams {
    pub last_branch: Option<String>,
    pub this_branch: Option<String>,
    pub release_date: Option<String>,
    unknown: Vec<String>,
}

/// Parameters that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedParams {
    pub range: LogRange,
    pub release_date: NaiveDate,
}

impl ReleaseParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_properties<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (key, value) in properties {
            params.set(key.as_ref(), value);
        }
        params
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = Some(value.into());
        match key {
            LAST_BRANCH => self.last_branch = value,
            THIS_BRANCH => self.this_branch = value,
            RELEASE_DATE => self.release_date = value,
            other => self.unknown.push(other.to_string()),
        }
    }

    pub fn with_last_branch(mut self, value: impl Into<String>) -> Self {
        self.last_branch = Some(value.into());
        self
    }

    pub fn with_this_branch(mut self, value: impl Into<String>) -> Self {
        self.this_branch = Some(value.into());
        self
    }

    pub fn with_release_date(mut self, value: impl Into<String>) -> Self {
        self.release_date = Some(value.into());
        self
    }

    /// Check every parameter and report all problems at once.
    pub fn validate(&self) -> Result<ValidatedParams> {
        let mut problems = Vec::new();

        let last_branch = present(&self.last_branch);
        if last_branch.is_none() {
            problems.push(LatencyError::MissingParameter(LAST_BRANCH).to_string());
        }
        let this_branch = present(&self.this_branch);
        if this_branch.is_none() {
            problems.push(LatencyError::MissingParameter(THIS_BRANCH).to_string());
        }

        let release_date = match present(&self.release_date) {
            Some(raw) => match parse_date(raw) {
                Ok(date) => Some(date),
                Err(e) => {
                    problems.push(format!("Can't parse the {RELEASE_DATE}: {e}."));
                    None
                }
            },
            None => {
                problems.push(LatencyError::MissingParameter(RELEASE_DATE).to_string());
                None
            }
        };

        for key in &self.unknown {
            problems.push(format!("Unknown parameter '{key}'."));
        }

        match (last_branch, this_branch, release_date) {
            (Some(from), Some(to), Some(release_date)) if problems.is_empty() => Ok(ValidatedParams {
                range: LogRange::new(from, to),
                release_date,
            }),
            _ => Err(LatencyError::Validation {
                problems,
                usage: USAGE,
            }),
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// clap value parser for `-D key=value`.
pub fn parse_property(input: &str) -> std::result::Result<(String, String), String> {
    input
        .split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got '{input}'"))
}
