pub mod log;
pub mod parse;
pub mod runner;

pub use log::{log_args, CommitLog, PRETTY_FORMAT};
pub use parse::parse_line;
pub use runner::{CapturedOutput, CommandRunner, ProcessRunner, ScriptedRunner};
