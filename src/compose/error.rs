use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Failed to execute '{command}': {source}")]
    LaunchFailed {
        command: String,
        source: std::io::Error,
    },
}
