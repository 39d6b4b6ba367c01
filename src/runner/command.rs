/// The documentation-test invocation: program, arguments, and its echo rendering.
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::Command;

/// Program used when none is given.
pub const DEFAULT_PROGRAM: &str = "cargo";

/// Optional knobs for the default `cargo test --doc` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctestOptions {
    /// Forwarded as `--manifest-path`.
    pub manifest_path: Option<PathBuf>,
    /// Each entry is forwarded as `-p <SPEC>`.
    pub packages: Vec<String>,
    /// Appended after `--` (test harness arguments).
    pub trailing: Vec<OsString>,
}

/// A single external command, built but not yet run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctestCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl DoctestCommand {
    /// A command with no arguments.
    #[must_use]
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// `<program> test --doc` plus whatever `opts` asks for.
    #[must_use]
    pub fn cargo_doc(program: impl Into<OsString>, opts: &DoctestOptions) -> Self {
        let mut cmd = Self::new(program).args(["test", "--doc"]);
        if let Some(path) = &opts.manifest_path {
            cmd = cmd.arg("--manifest-path").arg(path);
        }
        for spec in &opts.packages {
            cmd = cmd.arg("-p").arg(spec);
        }
        if !opts.trailing.is_empty() {
            cmd = cmd.arg("--").args(&opts.trailing);
        }
        cmd
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    /// Append several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_owned()));
        self
    }

    #[must_use]
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    #[must_use]
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Render as a shell-quoted line, the way `set -x` shows a command.
    #[must_use]
    pub fn display_line(&self) -> String {
        let words: Vec<String> = std::iter::once(&self.program)
            .chain(&self.args)
            .map(|w| w.to_string_lossy().into_owned())
            .collect();
        // Interior NUL bytes cannot be quoted; fall back to a plain join.
        shlex::try_join(words.iter().map(String::as_str)).unwrap_or_else(|_| words.join(" "))
    }

    /// Build the `std::process::Command` for spawning.
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.get_args());
        command
    }
}
