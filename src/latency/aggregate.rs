use crate::model::{CommitRecord, Summary};
use chrono::NaiveDate;

/// How the per-commit day counts are averaged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Averaging {
    /// Integer total divided by integer count, truncated toward zero.
    #[default]
    Truncated,
    /// True floating-point mean.
    Precise,
}

pub fn aggregate(records: &[CommitRecord], release: NaiveDate) -> Summary {
    aggregate_with(records, release, Averaging::Truncated)
}

pub fn aggregate_with(records: &[CommitRecord], release: NaiveDate, averaging: Averaging) -> Summary {
    if records.is_empty() {
        return Summary::empty();
    }

    let commit_count = records.len();
    let total_days: i64 = records.iter().map(|r| r.days_until(release)).sum();

    let average_days = match averaging {
        Averaging::Truncated => (total_days / commit_count as i64) as f64,
        Averaging::Precise => total_days as f64 / commit_count as f64,
    };

    Summary {
        commit_count,
        total_days,
        average_days,
    }
}
