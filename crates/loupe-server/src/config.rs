//! Preview server configuration.

use loupe_gen::FunctionPropPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Conventional theme subdirectory of a workspace's source tree.
pub const THEME_SUBDIR: &str = "src/theme";

/// Fixed name of the regenerated stylesheet inside the staging directory.
pub const SAFELIST_FILE: &str = "safelist.css";

/// Fixed name of the regenerated entry point inside the staging directory.
pub const ENTRY_FILE: &str = "preview.tsx";

/// Configuration for one preview session.
///
/// Built by the calling context (CLI, host panel) and handed to the
/// registry. Builder-style `with_*` methods override the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Workspace root the previewed components live in.
    pub workspace_root: PathBuf,

    /// Staging directory the generated stylesheet and entry are written to;
    /// also the dev-server working directory.
    pub staging_dir: PathBuf,

    /// Theme directory override. Defaults to `<workspace>/src/theme`.
    pub theme_dir: Option<PathBuf>,

    /// Host the dev server binds to.
    pub host: String,

    /// Fixed port the dev server binds to.
    pub port: u16,

    /// Dev-server argv; `--port`, `--host` and `--strictPort` are appended.
    pub command: Vec<String>,

    /// Seconds to wait for the dev server to accept connections.
    pub ready_timeout_secs: u64,

    /// Trailing-edge debounce window for theme change bursts, milliseconds.
    pub debounce_ms: u64,

    /// How function-type prop defaults are serialized.
    pub function_props: FunctionPropPolicy,
}

impl PreviewConfig {
    /// Create a configuration with the default host, port, and command.
    pub fn new(workspace_root: impl Into<PathBuf>, staging_dir: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            staging_dir: staging_dir.into(),
            theme_dir: None,
            host: "127.0.0.1".to_string(),
            port: 4173,
            command: vec!["npx".to_string(), "vite".to_string()],
            ready_timeout_secs: 30,
            debounce_ms: 150,
            function_props: FunctionPropPolicy::default(),
        }
    }

    /// Override the theme directory.
    pub fn with_theme_dir(mut self, theme_dir: impl Into<PathBuf>) -> Self {
        self.theme_dir = Some(theme_dir.into());
        self
    }

    /// Override the host/port pair.
    pub fn with_addr(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Override the dev-server command.
    pub fn with_command(mut self, command: Vec<String>) -> Self {
        self.command = command;
        self
    }

    /// Override the readiness timeout.
    pub fn with_ready_timeout(mut self, secs: u64) -> Self {
        self.ready_timeout_secs = secs;
        self
    }

    /// Override the debounce window.
    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Set the function-prop policy.
    pub fn with_function_props(mut self, policy: FunctionPropPolicy) -> Self {
        self.function_props = policy;
        self
    }

    /// The effective theme directory.
    pub fn theme_dir(&self) -> PathBuf {
        self.theme_dir
            .clone()
            .unwrap_or_else(|| self.workspace_root.join(THEME_SUBDIR))
    }

    /// The origin the embedding surface should point an iframe at.
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Path of the regenerated stylesheet.
    pub fn safelist_path(&self) -> PathBuf {
        self.staging_dir.join(SAFELIST_FILE)
    }

    /// Path of the regenerated entry point.
    pub fn entry_path(&self) -> PathBuf {
        self.staging_dir.join(ENTRY_FILE)
    }

    fn path_str(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    /// Check that both paths are non-empty strings. Cheap enough to run at
    /// construction; existence is checked separately at startup.
    pub fn validate_non_empty(&self) -> crate::error::Result<()> {
        if self.workspace_root.as_os_str().is_empty() || self.staging_dir.as_os_str().is_empty() {
            return Err(crate::error::ServerError::InvalidPaths {
                workspace: Self::path_str(&self.workspace_root),
                staging: Self::path_str(&self.staging_dir),
                hint: "workspace and staging paths must be non-empty".to_string(),
            });
        }
        Ok(())
    }

    /// Check that both paths exist as directories. Run at startup so the
    /// error reaches the user before any process is spawned.
    pub fn validate_exists(&self) -> crate::error::Result<()> {
        self.validate_non_empty()?;
        if !self.workspace_root.is_dir() {
            return Err(crate::error::ServerError::InvalidPaths {
                workspace: Self::path_str(&self.workspace_root),
                staging: Self::path_str(&self.staging_dir),
                hint: "workspace root does not exist or is not a directory".to_string(),
            });
        }
        if !self.staging_dir.is_dir() {
            return Err(crate::error::ServerError::InvalidPaths {
                workspace: Self::path_str(&self.workspace_root),
                staging: Self::path_str(&self.staging_dir),
                hint: "staging directory does not exist or is not a directory".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PreviewConfig::new("/ws", "/ws/.loupe");
        assert_eq!(config.server_url(), "http://127.0.0.1:4173");
        assert_eq!(config.theme_dir(), PathBuf::from("/ws/src/theme"));
        assert_eq!(config.safelist_path(), PathBuf::from("/ws/.loupe/safelist.css"));
        assert_eq!(config.entry_path(), PathBuf::from("/ws/.loupe/preview.tsx"));
        assert_eq!(config.command, vec!["npx", "vite"]);
    }

    #[test]
    fn test_builders() {
        let config = PreviewConfig::new("/ws", "/ws/.loupe")
            .with_addr("0.0.0.0", 5000)
            .with_theme_dir("/ws/styles/tokens")
            .with_debounce_ms(300);
        assert_eq!(config.server_url(), "http://0.0.0.0:5000");
        assert_eq!(config.theme_dir(), PathBuf::from("/ws/styles/tokens"));
        assert_eq!(config.debounce_ms, 300);
    }

    #[test]
    fn test_empty_paths_rejected() {
        let config = PreviewConfig::new("", "/ws/.loupe");
        let err = config.validate_non_empty().unwrap_err();
        assert!(err.to_string().contains("non-empty"));

        let config = PreviewConfig::new("/ws", "");
        assert!(config.validate_non_empty().is_err());
    }

    #[test]
    fn test_missing_dirs_rejected_with_both_paths_in_message() {
        let config = PreviewConfig::new("/definitely/not/here", "/also/not/here");
        let err = config.validate_exists().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("/definitely/not/here"));
        assert!(msg.contains("/also/not/here"));
    }
}
