/// Errors from running the documentation-test command.
use thiserror::Error;

/// Exit code used by shells when a command cannot be found.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit code used by shells when a command is found but cannot be executed.
pub const EXIT_CANNOT_EXECUTE: i32 = 126;

/// Base added to a terminating signal number to form the exit code.
pub const EXIT_SIGNAL_BASE: i32 = 128;

/// Everything that can stop a run short of a zero exit status.
#[derive(Debug, Error)]
pub enum RunError {
    /// The child ran and exited non-zero. Its own output already explains why.
    #[error("documentation tests failed with exit code {code}")]
    SubprocessFailure {
        /// The child's exit code, propagated verbatim.
        code: i32,
    },

    /// The program could not be resolved on `PATH`.
    #[error("{program}: command not found")]
    CommandNotFound {
        /// Program name as given.
        program: String,
    },

    /// The program exists but spawning or waiting on it failed.
    #[error("{program}: {source}")]
    Spawn {
        /// Program name as given.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The child was terminated by a signal and has no exit code.
    #[error("documentation tests terminated by signal {signal}")]
    Signaled {
        /// Signal number.
        signal: i32,
    },
}

impl RunError {
    /// Return the process exit code for this error, following shell conventions.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SubprocessFailure { code } => *code,
            Self::CommandNotFound { .. } => EXIT_NOT_FOUND,
            Self::Spawn { .. } => EXIT_CANNOT_EXECUTE,
            Self::Signaled { signal } => EXIT_SIGNAL_BASE + signal,
        }
    }

    /// Whether the wrapper should stay quiet and let the child's output speak.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::SubprocessFailure { .. })
    }

    /// Machine-readable error code (`snake_case`) for the JSON envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::SubprocessFailure { .. } => "subprocess_failure",
            Self::CommandNotFound { .. } => "command_not_found",
            Self::Spawn { .. } => "spawn_failed",
            Self::Signaled { .. } => "signaled",
        }
    }
}
