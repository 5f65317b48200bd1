//! Loupe CLI - live component preview for design-token workspaces.
//!
//! This is the main entry point for the Loupe CLI. It handles command-line
//! argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use loupe_cli::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);
    ui::init_quiet(args.quiet);

    let result = match args.command {
        cli::Command::Preview(preview_args) => commands::preview_execute(preview_args).await,
        cli::Command::Scan(scan_args) => commands::scan_execute(scan_args).await,
        cli::Command::Entry(entry_args) => commands::entry_execute(entry_args).await,
    };

    // Convert CLI errors to miette diagnostics for readable error reporting
    result.map_err(error::cli_error_to_miette)
}
