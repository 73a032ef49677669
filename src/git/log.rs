use super::runner::CommandRunner;
use crate::error::Result;
use crate::model::LogRange;
use tracing::{debug, warn};

/// Passed to git verbatim, quotes included, so every output line arrives wrapped in `"`.
pub const PRETTY_FORMAT: &str = "--pretty=format:\"%ad|%an|%s\"";

pub fn log_args(range: &LogRange) -> Vec<String> {
    vec![
        "log".to_string(),
        "--no-merges".to_string(),
        "--date=short".to_string(),
        PRETTY_FORMAT.to_string(),
        range.revision_spec(),
    ]
}

/// `git log` over a single commit range.
pub struct CommitLog<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    range: LogRange,
}

impl<'a, R: CommandRunner + ?Sized> CommitLog<'a, R> {
    pub fn new(runner: &'a R, range: LogRange) -> Self {
        Self { runner, range }
    }

    pub fn range(&self) -> &LogRange {
        &self.range
    }

    pub fn args(&self) -> Vec<String> {
        log_args(&self.range)
    }

    /// The exact command line handed to the runner, for echoing to the user.
    pub fn command_line(&self) -> String {
        std::iter::once(self.runner.program().to_string())
            .chain(self.args())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the log and yield its output one line at a time.
    ///
    /// A non-zero exit is only logged: whatever git printed instead of commits
    /// fails later when the lines are parsed.
    pub fn read(&self) -> Result<std::vec::IntoIter<String>> {
        let output = self.runner.run(&self.args())?;
        debug!(range = %self.range, lines = output.lines.len(), "git log finished");
        if !output.success {
            warn!(
                range = %self.range,
                code = ?output.code,
                "{} exited unsuccessfully",
                self.runner.program()
            );
        }
        Ok(output.lines.into_iter())
    }
}
