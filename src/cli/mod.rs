mod error;
mod instance;
pub mod parser;

pub use error::CliError;
pub use instance::run_action;

use clap::Parser;
use parser::Cli;
use std::process::ExitStatus;

// Helper function to parse args without terminating on failure; the binary
// decides the exit status for usage errors.
pub fn parse_args() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}

// Main CLI execution function, receives parsed args
pub async fn run(cli: Cli) -> Result<Exit, CliError> {
    instance::run(&cli).await
}

/// How the process should terminate once the dispatched command finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Exit with this status code.
    Code(i32),
    /// The dispatched command died from this signal; deliver it to the
    /// parent as well.
    Signal(i32),
}

impl Exit {
    /// Map a child's exit status onto the parent's termination.
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Exit::Code(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Exit::Signal(signal);
            }
        }

        Exit::Code(1)
    }
}
