use super::{Averaging, Report};
use crate::model::{LatencyEntry, LatencyOutput, Summary, SCHEMA_VERSION};
use anyhow::Result;
use chrono::Utc;

/// Whole numbers keep one decimal (`3.0`), anything else gets two.
pub fn format_days(days: f64) -> String {
    if days.fract() == 0.0 {
        format!("{days:.1}")
    } else {
        format!("{days:.2}")
    }
}

pub fn summary_line(summary: &Summary) -> String {
    format!(
        "{} commits.  Average {} days from commit to production",
        summary.commit_count,
        format_days(summary.average_days)
    )
}

pub fn output_summary(summary: &Summary) -> Result<()> {
    println!("{}", summary_line(summary));
    Ok(())
}

fn entries(report: &Report) -> Vec<LatencyEntry> {
    report
        .records
        .iter()
        .map(|r| LatencyEntry::from_record(r, report.params.release_date))
        .collect()
}

pub fn output_json(report: &Report, averaging: Averaging) -> Result<()> {
    let output = LatencyOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        last_branch: report.params.range.from.clone(),
        this_branch: report.params.range.to.clone(),
        release_date: report.params.release_date,
        command: report.command.clone(),
        precise: averaging == Averaging::Precise,
        summary: report.summary,
        entries: entries(report),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(report: &Report) -> Result<()> {
    for entry in entries(report) {
        println!("{}", serde_json::to_string(&entry)?);
    }
    Ok(())
}
