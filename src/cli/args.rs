/// CLI argument definitions via clap derive.
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::runner::{DEFAULT_PROGRAM, DoctestOptions};

/// doctest-runner — run a project's documentation tests once and exit with their status.
#[derive(Debug, Parser)]
#[command(
    name = "doctest-runner",
    about = "Run a project's documentation tests once and exit with their status",
    version
)]
pub struct Cli {
    /// Program to invoke in place of `cargo`.
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_PROGRAM)]
    pub cargo: OsString,

    /// Path to the `Cargo.toml` of the project under test.
    #[arg(long, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,

    /// Package to run documentation tests for (repeatable).
    #[arg(short, long = "package", value_name = "SPEC")]
    pub packages: Vec<String>,

    /// Do not echo the command line to stderr before running it.
    #[arg(long)]
    pub no_echo: bool,

    /// Format for the runner's own error reports. Test output is never reformatted.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Arguments passed to the test harness after `--`.
    #[arg(last = true, value_name = "ARGS")]
    pub trailing: Vec<OsString>,
}

impl Cli {
    /// Collect the invocation knobs for `DoctestCommand::cargo_doc`.
    #[must_use]
    pub fn doctest_options(&self) -> DoctestOptions {
        DoctestOptions {
            manifest_path: self.manifest_path.clone(),
            packages: self.packages.clone(),
            trailing: self.trailing.clone(),
        }
    }
}

/// Output format variants for error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// `Error: <message>` on stderr.
    #[default]
    Text,
    /// Pretty-printed JSON envelope on stderr.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_default_invocation() {
        let cli = Cli::try_parse_from(["doctest-runner"]).unwrap();
        assert_eq!(cli.cargo, "cargo");
        assert_eq!(cli.doctest_options(), DoctestOptions::default());
        assert!(!cli.no_echo);
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_packages_and_trailing() {
        let cli = Cli::try_parse_from([
            "doctest-runner",
            "-p",
            "floats",
            "--package",
            "floats-macros",
            "--",
            "--test-threads",
            "1",
        ])
        .unwrap();
        assert_eq!(cli.packages, ["floats", "floats-macros"]);
        assert_eq!(cli.trailing, ["--test-threads", "1"]);
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["doctest-runner", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["doctest-runner", "--frobnicate"]).is_err());
    }
}
