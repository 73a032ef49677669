pub mod aggregate;
pub mod exec;
pub mod fetch;
pub mod output;

pub use aggregate::{aggregate, aggregate_with, Averaging};
pub use exec::{exec, run, run_with_echo, ExecOptions, OutputMode, Report};
pub use fetch::{fetch_commit_records, fetch_commit_records_with_progress};
pub use output::{format_days, output_json, output_ndjson, output_summary, summary_line};
