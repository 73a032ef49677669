use crate::error::{LatencyError, Result};
use std::cell::RefCell;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Everything a finished command printed, stdout lines first, then stderr.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub lines: Vec<String>,
    pub success: bool,
    pub code: Option<i32>,
}

/// Runs one external program to completion and hands back its output.
pub trait CommandRunner {
    fn program(&self) -> &str;

    fn run(&self, args: &[String]) -> Result<CapturedOutput>;
}

/// Spawns a real child process.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
    current_dir: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl ProcessRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            current_dir: None,
            timeout: None,
        }
    }

    pub fn with_current_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn wait(&self, child: &mut Child) -> Result<ExitStatus> {
        let Some(timeout) = self.timeout else {
            return Ok(child.wait()?);
        };

        let deadline = Instant::now() + timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                if let Err(e) = child.kill() {
                    warn!(program = %self.program, error = %e, "failed to kill timed out process");
                }
                child.wait()?;
                return Err(LatencyError::ProcessTimeout {
                    program: self.program.clone(),
                    timeout,
                });
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl CommandRunner for ProcessRunner {
    fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, args: &[String]) -> Result<CapturedOutput> {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        debug!(program = %self.program, ?args, "spawning");
        let mut child = command.spawn().map_err(|source| LatencyError::ProcessLaunch {
            program: self.program.clone(),
            source,
        })?;

        // Both pipes are drained while the child runs so it never blocks on a full buffer.
        let stdout = child.stdout.take().map(drain_lines);
        let stderr = child.stderr.take().map(drain_lines);

        let status = self.wait(&mut child)?;

        let mut lines = collect_lines(stdout)?;
        lines.extend(collect_lines(stderr)?);

        Ok(CapturedOutput {
            lines,
            success: status.success(),
            code: status.code(),
        })
    }
}

fn drain_lines<R: Read + Send + 'static>(reader: R) -> JoinHandle<io::Result<Vec<String>>> {
    thread::spawn(move || {
        let mut reader = BufReader::new(reader);
        let mut lines = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            while matches!(buf.last(), Some(b'\n' | b'\r')) {
                buf.pop();
            }
            lines.push(String::from_utf8_lossy(&buf).into_owned());
        }
        Ok(lines)
    })
}

fn collect_lines(handle: Option<JoinHandle<io::Result<Vec<String>>>>) -> Result<Vec<String>> {
    match handle {
        Some(handle) => {
            let lines = handle
                .join()
                .map_err(|_| io::Error::other("output reader thread panicked"))??;
            Ok(lines)
        }
        None => Ok(Vec::new()),
    }
}

/// Replays canned output instead of spawning anything.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    program: String,
    lines: Vec<String>,
    success: bool,
    launch_failure: Option<io::ErrorKind>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: "git".to_string(),
            lines: lines.into_iter().map(Into::into).collect(),
            success: true,
            ..Self::default()
        }
    }

    /// A runner whose program can never be started.
    pub fn unlaunchable(kind: io::ErrorKind) -> Self {
        Self {
            program: "git".to_string(),
            launch_failure: Some(kind),
            ..Self::default()
        }
    }

    pub fn exiting_with_failure(mut self) -> Self {
        self.success = false;
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, args: &[String]) -> Result<CapturedOutput> {
        self.calls.borrow_mut().push(args.to_vec());
        if let Some(kind) = self.launch_failure {
            return Err(LatencyError::ProcessLaunch {
                program: self.program.clone(),
                source: io::Error::from(kind),
            });
        }
        Ok(CapturedOutput {
            lines: self.lines.clone(),
            success: self.success,
            code: Some(if self.success { 0 } else { 128 }),
        })
    }
}
