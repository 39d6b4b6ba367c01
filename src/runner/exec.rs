/// Spawn the command once, wait, and classify how it ended.
use std::io::{self, Write};
use std::process::ExitStatus;

use tracing::{debug, info};

use super::command::DoctestCommand;
use super::errors::RunError;

/// How a run should behave around the child.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Write `+ <command line>` to stderr before spawning.
    pub echo: bool,
}

/// A run whose child exited zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub exit_code: i32,
}

/// Run `cmd` once with inherited stdio.
///
/// # Errors
///
/// Returns `RunError::SubprocessFailure` carrying the child's exit code when
/// it exits non-zero, `RunError::CommandNotFound` when the program cannot be
/// resolved, `RunError::Spawn` on any other I/O failure, and
/// `RunError::Signaled` when the child dies from a signal.
pub fn run(cmd: &DoctestCommand, opts: RunOptions) -> Result<RunOutcome, RunError> {
    let line = cmd.display_line();
    if opts.echo {
        echo(&line);
    }

    let program = cmd.program().to_string_lossy().into_owned();
    debug!(command = %line, "spawning documentation tests");

    let mut child = cmd.to_command().spawn().map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            RunError::CommandNotFound {
                program: program.clone(),
            }
        } else {
            RunError::Spawn {
                program: program.clone(),
                source,
            }
        }
    })?;

    debug!(pid = child.id(), "child started");
    let status = child
        .wait()
        .map_err(|source| RunError::Spawn { program, source })?;

    classify(status)
}

/// Map a finished child's status to the wrapper's result.
fn classify(status: ExitStatus) -> Result<RunOutcome, RunError> {
    match status.code() {
        Some(0) => {
            info!("documentation tests passed");
            Ok(RunOutcome { exit_code: 0 })
        }
        Some(code) => {
            info!(code, "documentation tests failed");
            Err(RunError::SubprocessFailure { code })
        }
        None => Err(RunError::Signaled {
            signal: terminating_signal(status),
        }),
    }
}

#[cfg(unix)]
fn terminating_signal(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.signal().unwrap_or(0)
}

#[cfg(not(unix))]
fn terminating_signal(_status: ExitStatus) -> i32 {
    0
}

fn echo(line: &str) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "+ {line}");
    let _ = out.flush();
}
