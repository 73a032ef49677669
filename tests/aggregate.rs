use chrono::{Duration, NaiveDate};
use daystorelease::latency::{aggregate, aggregate_with, Averaging};
use daystorelease::model::CommitRecord;

fn release() -> NaiveDate {
    NaiveDate::from_ymd_opt(2014, 3, 20).unwrap()
}

fn records_at(deltas: &[i64]) -> Vec<CommitRecord> {
    deltas
        .iter()
        .map(|d| CommitRecord::new(release() - Duration::days(*d), format!("dev|{d} days out")))
        .collect()
}

#[test]
fn no_commits_average_zero() {
    let summary = aggregate(&[], release());
    assert_eq!(summary.commit_count, 0);
    assert_eq!(summary.total_days, 0);
    assert_eq!(summary.average_days, 0.0);

    let precise = aggregate_with(&[], release(), Averaging::Precise);
    assert_eq!(precise.average_days, 0.0);
}

#[test]
fn evenly_spread_deltas() {
    let summary = aggregate(&records_at(&[5, 10, 15]), release());
    assert_eq!(summary.commit_count, 3);
    assert_eq!(summary.total_days, 30);
    assert_eq!(summary.average_days, 10.0);
}

#[test]
fn average_truncates_toward_zero() {
    let summary = aggregate(&records_at(&[10, 5, -5]), release());
    assert_eq!(summary.total_days, 10);
    assert_eq!(summary.average_days, 3.0);

    let negative = aggregate(&records_at(&[-1, -2, -4]), release());
    assert_eq!(negative.total_days, -7);
    assert_eq!(negative.average_days, -2.0);
}

#[test]
fn precise_average_keeps_fraction() {
    let summary = aggregate_with(&records_at(&[10, 5, -5]), release(), Averaging::Precise);
    assert!((summary.average_days - 10.0 / 3.0).abs() < 1e-9);
}

#[test]
fn commits_after_release_count_negative() {
    let record = CommitRecord::new(NaiveDate::from_ymd_opt(2014, 3, 25).unwrap(), "dev|late");
    assert_eq!(record.days_until(release()), -5);
}

#[test]
fn day_counts_cross_month_and_year_boundaries() {
    let record = CommitRecord::new(NaiveDate::from_ymd_opt(2013, 12, 31).unwrap(), "dev|eve");
    assert_eq!(record.days_until(release()), 79);
}
