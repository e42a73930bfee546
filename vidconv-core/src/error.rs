use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for vidconv
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} not found. Ensure FFmpeg (which includes ffprobe) is installed and in your PATH")]
    DependencyNotFound(String),

    #[error("failed to start {0}: {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("{tool} exited with {status}. Stderr:\n{stderr}")]
    CommandFailed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("could not parse {0} output: {1}")]
    JsonParse(String, String),

    #[error("preset '{name}' not found. Available presets: {}", format_available(.available))]
    PresetNotFound { name: String, available: Vec<String> },

    #[error("unexpected error: {0}")]
    Other(String),
}

fn format_available(names: &[String]) -> String {
    if names.is_empty() {
        "(none defined)".to_string()
    } else {
        names.join(", ")
    }
}

/// Result type for vidconv operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Creates a `CommandStart` error for the given tool.
pub(crate) fn command_start_error(tool: &str, err: std::io::Error) -> CoreError {
    CoreError::CommandStart(tool.to_string(), err)
}

/// Creates a `CommandFailed` error carrying the tool's captured stderr.
pub(crate) fn command_failed_error(tool: &str, status: ExitStatus, stderr: String) -> CoreError {
    CoreError::CommandFailed {
        tool: tool.to_string(),
        status,
        stderr,
    }
}
