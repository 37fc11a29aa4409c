use async_trait::async_trait;
use std::process::ExitStatus;

use super::{CommandOutput, ComposeError};

/// A trait for running compose services in a uniform way, so the command
/// logic can be exercised in tests without a docker binary.
#[async_trait]
pub trait ServiceRunner {
    /// Run a service command, capturing its stdout. Stdin and stderr stay
    /// attached to the parent so the service can prompt and report freely.
    async fn run_captured(
        &self,
        service: &str,
        args: &[String],
    ) -> Result<CommandOutput, ComposeError>;

    /// Run a service command with all three streams attached and return its
    /// exit status once it terminates.
    async fn run_attached(
        &self,
        service: &str,
        args: &[String],
    ) -> Result<ExitStatus, ComposeError>;
}
