use tracing::{debug, instrument};

use super::error::CliError;
use super::parser::Cli;
use super::Exit;
use crate::compose::{ComposeRunner, ServiceRunner};
use crate::gcloud::{self, InstanceAction};
use crate::terraform::{self, TerraformError};

pub async fn run(cli: &Cli) -> Result<Exit, CliError> {
    let runner = ComposeRunner::new();
    run_action(cli.command.action(), cli.command.extra_args(), &runner).await
}

/// Execute one instance action: fetch the terraform outputs, resolve the
/// instance coordinates, then hand the assembled gcloud command to the
/// compose wrapper and report how the process should terminate.
#[instrument(name = "instance", skip(action, extra_args, runner), fields(action = action.name()))]
pub async fn run_action<R: ServiceRunner>(
    action: InstanceAction,
    extra_args: &[String],
    runner: &R,
) -> Result<Exit, CliError> {
    let outputs = match terraform::fetch_outputs(runner).await {
        Ok(outputs) => outputs,
        Err(TerraformError::CommandFailed { code }) => {
            // terraform already reported on the inherited stderr
            debug!(code, "terraform output failed, forwarding its exit status");
            return Ok(Exit::Code(code));
        }
        Err(e) => return Err(CliError::OperationFailed(e.to_string())),
    };

    let target = outputs
        .instance_target()
        .map_err(|e| CliError::OperationFailed(e.to_string()))?;

    let command = gcloud::join_command(&gcloud::build_command(action, &target, extra_args));

    // Echo the full gcloud command for audit before handing it off.
    println!("{}", command);
    debug!(%command, "dispatching through docker compose");

    let status = runner
        .run_attached("gcloud", std::slice::from_ref(&command))
        .await
        .map_err(|e| CliError::OperationFailed(format!("Failed to execute docker compose: {}", e)))?;

    Ok(Exit::from_status(status))
}
