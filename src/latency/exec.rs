use super::{aggregate_with, fetch_commit_records_with_progress, output_json, output_ndjson, output_summary, Averaging};
use crate::config::{ReleaseParams, ValidatedParams};
use crate::error::Result;
use crate::git::{CommandRunner, CommitLog};
use crate::model::{CommitRecord, Summary};
use anyhow::Context;
use console::style;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
    Ndjson,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExecOptions {
    pub output: OutputMode,
    pub averaging: Averaging,
}

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct Report {
    pub params: ValidatedParams,
    pub command: String,
    pub records: Vec<CommitRecord>,
    pub summary: Summary,
}

/// Validate, read the log for the range, parse it, and average it.
///
/// No process is started unless every parameter is valid.
pub fn run<R: CommandRunner + ?Sized>(
    params: &ReleaseParams,
    runner: &R,
    averaging: Averaging,
    show_progress: bool,
) -> Result<Report> {
    run_with_echo(params, runner, averaging, show_progress, |_| {})
}

/// Like [`run`], calling `echo` with the git command line just before it runs.
pub fn run_with_echo<R, F>(
    params: &ReleaseParams,
    runner: &R,
    averaging: Averaging,
    show_progress: bool,
    echo: F,
) -> Result<Report>
where
    R: CommandRunner + ?Sized,
    F: FnOnce(&str),
{
    let params = params.validate()?;
    let log = CommitLog::new(runner, params.range.clone());
    let command = log.command_line();
    echo(&command);

    let records = fetch_commit_records_with_progress(&log, show_progress)?;
    let summary = aggregate_with(&records, params.release_date, averaging);
    info!(
        range = %params.range,
        commits = summary.commit_count,
        average_days = summary.average_days,
        "computed release latency"
    );

    Ok(Report {
        params,
        command,
        records,
        summary,
    })
}

pub fn exec<R: CommandRunner + ?Sized>(params: &ReleaseParams, runner: &R, options: ExecOptions) -> anyhow::Result<()> {
    let text = options.output == OutputMode::Text;
    // Keep stdout parseable in JSON/NDJSON modes.
    let echo = |command: &str| {
        if text {
            println!("{}", style(command).dim());
        } else {
            eprintln!("{command}");
        }
    };
    let report = run_with_echo(params, runner, options.averaging, text, echo)
        .context("Failed to compute days to release")?;

    match options.output {
        OutputMode::Text => output_summary(&report.summary)?,
        OutputMode::Json => output_json(&report, options.averaging)?,
        OutputMode::Ndjson => output_ndjson(&report)?,
    }

    Ok(())
}
