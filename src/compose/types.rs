use serde::de::DeserializeOwned;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when decoding captured command output
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Output exceeds maximum size: {size} bytes")]
    OutputTooLarge { size: usize },
}

/// Captured stdout of a finished service command, plus its exit status.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    pub status: ExitStatus,
    pub duration: Duration,
}

impl CommandOutput {
    const MAX_OUTPUT_SIZE: usize = 10 * 1024 * 1024; // 10 MB

    pub fn is_success(&self) -> bool {
        self.status.success()
    }

    /// Exit code of the command, if it exited rather than died on a signal.
    pub fn exit_code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON into a custom type
    pub fn parse_json<T: DeserializeOwned>(&self) -> Result<T, OutputError> {
        if self.stdout.len() > Self::MAX_OUTPUT_SIZE {
            return Err(OutputError::OutputTooLarge {
                size: self.stdout.len(),
            });
        }
        serde_json::from_slice(&self.stdout).map_err(OutputError::JsonError)
    }
}
