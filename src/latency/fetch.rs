use crate::error::Result;
use crate::git::{parse_line, CommandRunner, CommitLog};
use crate::model::CommitRecord;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, trace};

/// Read the log and parse every line, stopping at the first bad one.
///
/// Blank lines are skipped; anything else that does not parse aborts the
/// whole run, since an average over a subset of commits would be wrong.
pub fn fetch_commit_records<R: CommandRunner + ?Sized>(log: &CommitLog<'_, R>) -> Result<Vec<CommitRecord>> {
    let mut records = Vec::new();
    for (index, line) in log.read()?.enumerate() {
        if line.trim().is_empty() {
            debug!(line = index + 1, "skipping blank log line");
            continue;
        }
        let record = parse_line(&line)?;
        trace!(date = %record.date, message = %record.message, "parsed commit");
        records.push(record);
    }
    Ok(records)
}

pub fn fetch_commit_records_with_progress<R: CommandRunner + ?Sized>(
    log: &CommitLog<'_, R>,
    show_progress: bool,
) -> Result<Vec<CommitRecord>> {
    if !show_progress {
        return fetch_commit_records(log);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Reading commits in {}...", log.range()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = fetch_commit_records(log);
    pb.finish_and_clear();
    result
}
