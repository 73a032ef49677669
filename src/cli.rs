use crate::config::{parse_property, ReleaseParams};
use crate::git::ProcessRunner;
use crate::latency::{Averaging, ExecOptions, OutputMode};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "daystorelease")]
#[command(about = "Average days from commit to production for a git commit range")]
#[command(version)]
pub struct Cli {
    #[arg(
        short = 'D',
        value_name = "KEY=VALUE",
        value_parser = parse_property,
        help = "Build property: lastBranch, thisBranch or releaseDate"
    )]
    pub properties: Vec<(String, String)>,

    #[arg(long, env = "LAST_BRANCH", help = "Reference the previous release was cut from")]
    pub last_branch: Option<String>,

    #[arg(long, env = "THIS_BRANCH", help = "Reference being released")]
    pub this_branch: Option<String>,

    #[arg(long, env = "RELEASE_DATE", help = "Production date, formatted YYYY-MM-DD")]
    pub release_date: Option<String>,

    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(long, default_value = "git", help = "git executable to run")]
    pub git: String,

    #[arg(long, value_parser = humantime::parse_duration, help = "Kill git after this long (e.g. 30s)")]
    pub timeout: Option<Duration>,

    #[arg(long, help = "Use a true floating-point average instead of truncating")]
    pub precise: bool,

    #[arg(long, conflicts_with = "ndjson", help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON")]
    pub ndjson: bool,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Named flags (or their environment variables) win over `-D` properties.
    pub fn release_params(&self) -> ReleaseParams {
        let mut params = ReleaseParams::from_properties(self.properties.iter().cloned());
        if let Some(v) = &self.last_branch {
            params = params.with_last_branch(v.clone());
        }
        if let Some(v) = &self.this_branch {
            params = params.with_this_branch(v.clone());
        }
        if let Some(v) = &self.release_date {
            params = params.with_release_date(v.clone());
        }
        params
    }

    pub fn runner(&self) -> ProcessRunner {
        let mut runner = ProcessRunner::new(self.git.clone());
        if let Some(repo) = &self.repo {
            runner = runner.with_current_dir(repo);
        }
        if let Some(timeout) = self.timeout {
            runner = runner.with_timeout(timeout);
        }
        runner
    }

    pub fn options(&self) -> ExecOptions {
        let output = if self.json {
            OutputMode::Json
        } else if self.ndjson {
            OutputMode::Ndjson
        } else {
            OutputMode::Text
        };
        let averaging = if self.precise {
            Averaging::Precise
        } else {
            Averaging::Truncated
        };
        ExecOptions { output, averaging }
    }

    pub fn execute(self) -> Result<()> {
        crate::latency::exec(&self.release_params(), &self.runner(), self.options())
    }
}
