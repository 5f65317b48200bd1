//! Command-line interface definition for Loupe.
//!
//! Defines the complete CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `loupe preview` - Start the preview dev server for a workspace
//! - `loupe scan` - Scan a theme directory and print the safelist stylesheet
//! - `loupe entry` - Generate a preview entry point for a component

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Loupe - live component preview for design-token workspaces
#[derive(Parser, Debug)]
#[command(
    name = "loupe",
    version,
    about = "Live component preview for design-token workspaces",
    long_about = "Loupe previews UI components against a workspace's design tokens.\n\
                  It extracts tokens from theme CSS, generates a utility-class safelist\n\
                  stylesheet and a component entry point, and keeps both in sync with\n\
                  theme edits while a dev server serves the result."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available Loupe subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the preview dev server for a workspace
    ///
    /// Spawns the configured dev-server command against a staging directory,
    /// generates the safelist stylesheet and entry point, and regenerates
    /// them whenever the workspace theme directory changes.
    Preview(PreviewArgs),

    /// Scan a theme directory and print the safelist stylesheet
    ///
    /// Extracts design tokens from every CSS file under the theme directory
    /// and prints the generated stylesheet to stdout.
    Scan(ScanArgs),

    /// Generate a preview entry point for a component
    ///
    /// Reads a component descriptor JSON file and prints the generated
    /// React entry source to stdout.
    Entry(EntryArgs),
}

/// Arguments for the preview command
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Workspace root containing the components to preview
    #[arg(default_value = ".", value_name = "WORKSPACE")]
    pub workspace: PathBuf,

    /// Staging directory for generated files (default: <workspace>/.loupe)
    #[arg(long, value_name = "DIR")]
    pub staging: Option<PathBuf>,

    /// Theme directory override (default: <workspace>/src/theme)
    #[arg(long, value_name = "DIR")]
    pub theme_dir: Option<PathBuf>,

    /// Host the dev server binds to
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port the dev server binds to
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Dev-server command, split on whitespace (e.g. "npx vite")
    #[arg(long, value_name = "CMD")]
    pub command: Option<String>,

    /// Seconds to wait for the dev server to become ready
    #[arg(long, value_name = "SECS")]
    pub ready_timeout: Option<u64>,

    /// Debounce window for theme change bursts, in milliseconds
    #[arg(long, value_name = "MS")]
    pub debounce: Option<u64>,

    /// Inline function-type prop defaults verbatim instead of rejecting them
    ///
    /// Only enable for trusted descriptor sources; the default text is
    /// emitted into the entry point unmodified.
    #[arg(long)]
    pub inline_function_props: bool,

    /// Component descriptor JSON file to load immediately
    #[arg(long, value_name = "FILE")]
    pub component: Option<PathBuf>,

    /// Config file path (default: <workspace>/loupe.config.json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Workspace root to scan
    #[arg(default_value = ".", value_name = "WORKSPACE")]
    pub workspace: PathBuf,

    /// Theme directory override (default: <workspace>/src/theme)
    #[arg(long, value_name = "DIR")]
    pub theme_dir: Option<PathBuf>,

    /// Print a token summary instead of the stylesheet
    #[arg(long)]
    pub summary: bool,
}

/// Arguments for the entry command
#[derive(Args, Debug)]
pub struct EntryArgs {
    /// Component descriptor JSON file (name, absolute_path, props)
    #[arg(required = true, value_name = "DESCRIPTOR")]
    pub descriptor: PathBuf,

    /// Directory the entry point will live in; import paths are computed
    /// relative to it
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub staging: PathBuf,

    /// Inline function-type prop defaults verbatim instead of rejecting them
    #[arg(long)]
    pub inline_function_props: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_preview_defaults() {
        let cli = Cli::try_parse_from(["loupe", "preview"]).unwrap();
        let Command::Preview(args) = cli.command else {
            panic!("expected preview");
        };
        assert_eq!(args.workspace, PathBuf::from("."));
        assert!(args.staging.is_none());
        assert!(args.port.is_none());
        assert!(!args.inline_function_props);
    }

    #[test]
    fn test_preview_overrides() {
        let cli = Cli::try_parse_from([
            "loupe",
            "preview",
            "/ws",
            "--staging",
            "/tmp/stage",
            "--port",
            "5000",
            "--command",
            "npm run dev",
            "--inline-function-props",
        ])
        .unwrap();
        let Command::Preview(args) = cli.command else {
            panic!("expected preview");
        };
        assert_eq!(args.workspace, PathBuf::from("/ws"));
        assert_eq!(args.staging, Some(PathBuf::from("/tmp/stage")));
        assert_eq!(args.port, Some(5000));
        assert_eq!(args.command.as_deref(), Some("npm run dev"));
        assert!(args.inline_function_props);
    }

    #[test]
    fn test_scan_summary_flag() {
        let cli = Cli::try_parse_from(["loupe", "scan", "/ws", "--summary"]).unwrap();
        let Command::Scan(args) = cli.command else {
            panic!("expected scan");
        };
        assert_eq!(args.workspace, PathBuf::from("/ws"));
        assert!(args.summary);
    }

    #[test]
    fn test_entry_requires_descriptor() {
        assert!(Cli::try_parse_from(["loupe", "entry"]).is_err());
        let cli = Cli::try_parse_from(["loupe", "entry", "btn.json"]).unwrap();
        let Command::Entry(args) = cli.command else {
            panic!("expected entry");
        };
        assert_eq!(args.descriptor, PathBuf::from("btn.json"));
    }

    #[test]
    fn test_verbose_quiet_conflict() {
        assert!(Cli::try_parse_from(["loupe", "-v", "-q", "scan"]).is_err());
    }
}
