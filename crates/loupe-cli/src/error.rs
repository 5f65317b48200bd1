//! Error handling for the Loupe CLI.
//!
//! The top-level [`CliError`] converts automatically from the library
//! crates' error types via `#[from]`, and each hand-written variant carries
//! a hint so the message tells the user what to do next.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {message}\n\nHint: {hint}")]
    Config {
        /// What went wrong
        message: String,
        /// Helpful hint for fixing it
        hint: String,
    },

    /// Component descriptor file doesn't exist or can't be read
    #[error("Component descriptor not found: {}\n\nHint: Pass a JSON file describing the component (name, absolute_path, props)", .0.display())]
    DescriptorNotFound(PathBuf),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Preview server errors
    #[error(transparent)]
    Server(#[from] loupe_server::ServerError),

    /// Entry generation errors
    #[error(transparent)]
    Gen(#[from] loupe_gen::GenError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result alias for CLI operations.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert CliError to a miette Report for terminal-friendly rendering.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Server(loupe_server::ServerError::StartupFailed {
            workspace,
            staging,
            source,
        }) => miette::miette!(
            "Preview server failed to start\nWorkspace: {}\nStaging: {}\n\nCause: {}",
            workspace.display(),
            staging.display(),
            source
        ),
        CliError::Server(loupe_server::ServerError::ReadyTimeout { url, timeout_secs }) => {
            miette::miette!(
                "Dev server did not become ready at {url} within {timeout_secs}s\n\n\
                 Hint: Check that the configured command starts a server on the configured port"
            )
        }
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_carries_hint() {
        let err = CliError::Config {
            message: "unknown field `prot`".to_string(),
            hint: "Check loupe.config.json field names".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unknown field"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_server_errors_pass_through_transparently() {
        let err = CliError::from(loupe_server::ServerError::NoComponentLoaded);
        assert!(err.to_string().contains("No component"));
    }
}
