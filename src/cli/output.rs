/// Error report formatting on stderr.
use std::io::Write;

use super::args::OutputFormat;
use crate::types::ErrorOutput;

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "{}", render_error(err, format));
}

fn render_error(err: &ErrorOutput, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(err).unwrap_or_default(),
        OutputFormat::Text => format!("Error: {}", err.error.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::RunError;

    fn not_found() -> ErrorOutput {
        ErrorOutput::from_run_error(&RunError::CommandNotFound {
            program: "cargo".to_owned(),
        })
    }

    #[test]
    fn test_text_report() {
        assert_eq!(
            render_error(&not_found(), OutputFormat::Text),
            "Error: cargo: command not found"
        );
    }

    #[test]
    fn test_json_report_parses() {
        let s = render_error(&not_found(), OutputFormat::Json);
        let back: ErrorOutput = serde_json::from_str(&s).unwrap();
        assert!(!back.ok);
        assert_eq!(back.error.exit_code, 127);
    }
}
