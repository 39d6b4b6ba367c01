/// CLI layer: argument parsing and error reporting.
pub mod args;
pub mod output;

pub use args::{Cli, OutputFormat};
pub use output::write_error;
