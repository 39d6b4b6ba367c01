/// Serializable output types for the runner's own reports.
///
/// The child's output is never captured; these only describe errors raised
/// by the wrapper itself.
use serde::{Deserialize, Serialize};

use crate::runner::RunError;

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Exit code the runner is about to return.
    pub exit_code: i32,
}

impl ErrorOutput {
    /// Construct from a `RunError`.
    #[must_use]
    pub fn from_run_error(err: &RunError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                exit_code: err.exit_code(),
            },
        }
    }
}
