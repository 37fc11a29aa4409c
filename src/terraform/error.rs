use crate::compose::{ComposeError, OutputError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerraformError {
    /// `terraform output` itself failed; the code is forwarded verbatim to
    /// the caller and terraform's own stderr already reached the terminal.
    #[error("terraform output exited with status {code}")]
    CommandFailed { code: i32 },

    #[error("Failed to parse terraform outputs: {0}")]
    ParseError(#[from] OutputError),

    #[error("Terraform output \"{0}\" is missing. Did you run terraform apply?")]
    MissingOutput(String),

    #[error("Terraform output \"{0}\" is empty. Did you run terraform apply?")]
    EmptyOutput(String),

    #[error("Terraform output \"{0}\" is not a scalar value")]
    NonScalarOutput(String),

    #[error("Failed to run terraform: {0}")]
    Executor(#[from] ComposeError),
}
