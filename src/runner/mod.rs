/// Runner layer: build the documentation-test command, run it once, map its exit status.
pub mod command;
pub mod errors;
pub mod exec;

pub use command::{DEFAULT_PROGRAM, DoctestCommand, DoctestOptions};
pub use errors::RunError;
pub use exec::{RunOptions, RunOutcome, run};
