//! Configuration file handling for the Loupe CLI.
//!
//! Settings merge from four layers, lowest priority first: built-in
//! defaults, `loupe.config.json` in the workspace, `LOUPE_*` environment
//! variables, and CLI flags.

use crate::cli::PreviewArgs;
use crate::error::{CliError, Result};
use figment::{
    providers::{Env, Format as _, Json, Serialized},
    Figment,
};
use loupe_gen::FunctionPropPolicy;
use loupe_server::PreviewConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Conventional config file name at the workspace root.
pub const CONFIG_FILE: &str = "loupe.config.json";

/// Resolved CLI configuration for a preview session.
///
/// Fields mirror [`PreviewConfig`] but stay optional or flat where the
/// layered sources need it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoupeConfig {
    /// Staging directory; `None` means `<workspace>/.loupe`.
    pub staging: Option<PathBuf>,

    /// Theme directory; `None` means `<workspace>/src/theme`.
    pub theme_dir: Option<PathBuf>,

    /// Host the dev server binds to.
    pub host: String,

    /// Fixed port the dev server binds to.
    pub port: u16,

    /// Dev-server argv.
    pub command: Vec<String>,

    /// Seconds to wait for the dev server to become ready.
    pub ready_timeout_secs: u64,

    /// Debounce window for theme change bursts, milliseconds.
    pub debounce_ms: u64,

    /// Inline function-type prop defaults instead of rejecting them.
    pub inline_function_props: bool,
}

impl Default for LoupeConfig {
    fn default() -> Self {
        Self {
            staging: None,
            theme_dir: None,
            host: "127.0.0.1".to_string(),
            port: 4173,
            command: vec!["npx".to_string(), "vite".to_string()],
            ready_timeout_secs: 30,
            debounce_ms: 150,
            inline_function_props: false,
        }
    }
}

impl LoupeConfig {
    /// Load configuration for a preview invocation.
    /// Priority: CLI args > environment variables > config file > defaults.
    pub fn load(args: &PreviewArgs) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = args.config.clone().or_else(|| {
            let default_path = args.workspace.join(CONFIG_FILE);
            default_path.exists().then_some(default_path)
        });
        if let Some(path) = config_file {
            figment = figment.merge(Json::file(path));
        }

        // LOUPE_PORT, LOUPE_COMMAND, LOUPE_THEME_DIR, ...
        figment = figment.merge(Env::prefixed("LOUPE_"));

        if let Some(staging) = &args.staging {
            figment = figment.merge(Serialized::default("staging", staging));
        }
        if let Some(theme_dir) = &args.theme_dir {
            figment = figment.merge(Serialized::default("theme_dir", theme_dir));
        }
        if let Some(host) = &args.host {
            figment = figment.merge(Serialized::default("host", host));
        }
        if let Some(port) = args.port {
            figment = figment.merge(Serialized::default("port", port));
        }
        if let Some(command) = &args.command {
            let argv: Vec<String> = command.split_whitespace().map(str::to_string).collect();
            if argv.is_empty() {
                return Err(CliError::InvalidArgument(
                    "--command must not be empty".to_string(),
                ));
            }
            figment = figment.merge(Serialized::default("command", argv));
        }
        if let Some(secs) = args.ready_timeout {
            figment = figment.merge(Serialized::default("ready_timeout_secs", secs));
        }
        if let Some(ms) = args.debounce {
            figment = figment.merge(Serialized::default("debounce_ms", ms));
        }
        if args.inline_function_props {
            figment = figment.merge(Serialized::default("inline_function_props", true));
        }

        figment.extract().map_err(|e| CliError::Config {
            message: e.to_string(),
            hint: "Check loupe.config.json syntax and field types".to_string(),
        })
    }

    /// Convert the resolved settings into a [`PreviewConfig`] for the given
    /// workspace root.
    pub fn into_preview_config(self, workspace: &Path) -> PreviewConfig {
        let staging = self
            .staging
            .unwrap_or_else(|| workspace.join(".loupe"));

        let mut config = PreviewConfig::new(workspace, staging)
            .with_addr(self.host, self.port)
            .with_command(self.command)
            .with_ready_timeout(self.ready_timeout_secs)
            .with_debounce_ms(self.debounce_ms)
            .with_function_props(if self.inline_function_props {
                FunctionPropPolicy::Inline
            } else {
                FunctionPropPolicy::Reject
            });
        if let Some(theme_dir) = self.theme_dir {
            config = config.with_theme_dir(theme_dir);
        }
        config
    }
}
