#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! doctest-runner — run a project's documentation tests once and exit with their status.

mod cli;
mod logging;
mod runner;
mod types;

use clap::Parser;

use cli::{Cli, write_error};
use runner::{DoctestCommand, RunOptions};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("warning: {err:#}");
    }

    let command = DoctestCommand::cargo_doc(&cli.cargo, &cli.doctest_options());
    let opts = RunOptions {
        echo: !cli.no_echo,
    };

    let code = match runner::run(&command, opts) {
        Ok(outcome) => outcome.exit_code,
        Err(err) => {
            if !err.is_silent() {
                write_error(&ErrorOutput::from_run_error(&err), cli.output);
            }
            err.exit_code()
        }
    };
    std::process::exit(code);
}
