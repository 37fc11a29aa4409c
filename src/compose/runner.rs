use async_trait::async_trait;
use std::process::{ExitStatus, Stdio};
use std::time::Instant;
use tokio::process::Command;

use super::error::ComposeError;
use super::traits::ServiceRunner;
use super::types::CommandOutput;

/// Runs compose services as `<program> compose run --rm <service> [args...]`
/// in an ephemeral container. The program defaults to `docker`; tests swap in
/// a stub binary.
pub struct ComposeRunner {
    program: String,
}

impl Default for ComposeRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposeRunner {
    pub fn new() -> Self {
        Self::with_program("docker")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, service: &str, args: &[String]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("compose").arg("run").arg("--rm").arg(service).args(args);
        cmd
    }

    fn describe(&self, service: &str) -> String {
        format!("{} compose run --rm {}", self.program, service)
    }
}

#[async_trait]
impl ServiceRunner for ComposeRunner {
    async fn run_captured(
        &self,
        service: &str,
        args: &[String],
    ) -> Result<CommandOutput, ComposeError> {
        let start = Instant::now();

        // Only stdout is piped; the service keeps the terminal for prompts
        // and errors.
        let output = self
            .command(service, args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| ComposeError::LaunchFailed {
                command: self.describe(service),
                source: e,
            })?;

        Ok(CommandOutput {
            stdout: output.stdout,
            status: output.status,
            duration: start.elapsed(),
        })
    }

    async fn run_attached(
        &self,
        service: &str,
        args: &[String],
    ) -> Result<ExitStatus, ComposeError> {
        self.command(service, args)
            .status()
            .await
            .map_err(|e| ComposeError::LaunchFailed {
                command: self.describe(service),
                source: e,
            })
    }
}
