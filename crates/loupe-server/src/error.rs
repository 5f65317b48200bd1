//! Error types for the preview server lifecycle.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the preview server subsystem.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Workspace or staging path is empty or does not exist.
    #[error("Invalid preview paths\n\nWorkspace: {workspace:?}\nStaging: {staging:?}\n\nHint: {hint}")]
    InvalidPaths {
        /// Configured workspace root.
        workspace: String,
        /// Configured staging directory.
        staging: String,
        /// What exactly is wrong.
        hint: String,
    },

    /// Startup failed; state was reset to Stopped. Carries both paths so the
    /// caller can surface a diagnosable message.
    #[error("Failed to start preview server\n\nWorkspace: {}\nStaging: {}\n\nCaused by: {source}", .workspace.display(), .staging.display())]
    StartupFailed {
        /// Workspace root at the time of the failure.
        workspace: PathBuf,
        /// Staging directory at the time of the failure.
        staging: PathBuf,
        /// Underlying failure.
        #[source]
        source: Box<ServerError>,
    },

    /// The dev-server process could not be spawned.
    #[error("Failed to spawn dev server command '{command}': {source}\n\nHint: check that the command is installed and on PATH")]
    Spawn {
        /// The argv[0] that failed to spawn.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The dev-server process exited before reporting ready.
    #[error("Dev server command '{command}' exited with {code:?} before becoming ready")]
    ProcessExited {
        /// The spawned command.
        command: String,
        /// Exit code, if any.
        code: Option<i32>,
    },

    /// The dev server never accepted connections within the timeout.
    #[error("Dev server did not become ready at {url} within {timeout_secs}s")]
    ReadyTimeout {
        /// The origin that was probed.
        url: String,
        /// Configured readiness timeout.
        timeout_secs: u64,
    },

    /// A props update was requested with no component loaded.
    #[error("No component is currently loaded\n\nHint: call update_component before update_component_props")]
    NoComponentLoaded,

    /// File watching errors.
    #[error("Theme watcher error: {0}")]
    Watch(#[from] notify::Error),

    /// I/O errors from staging-file writes.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Entry-point generation errors.
    #[error("Entry generation error: {0}")]
    Gen(#[from] loupe_gen::GenError),
}

/// Result type alias using `ServerError`.
pub type Result<T, E = ServerError> = std::result::Result<T, E>;
