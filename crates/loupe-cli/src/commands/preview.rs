//! Preview command implementation.
//!
//! Starts the preview dev server for a workspace and keeps the staged
//! stylesheet and entry point in sync with theme edits until Ctrl-C.

use crate::cli::PreviewArgs;
use crate::commands::utils;
use crate::config::LoupeConfig;
use crate::error::Result;
use crate::ui;
use loupe_server::PreviewRegistry;
use tracing::{debug, info};

/// Execute the preview command.
///
/// # Steps
///
/// 1. Resolve configuration (defaults, config file, env, CLI flags)
/// 2. Create the staging directory if missing
/// 3. Start the dev server and the theme watcher
/// 4. Optionally load an initial component descriptor
/// 5. Run until Ctrl-C, then dispose the session
pub async fn execute(args: PreviewArgs) -> Result<()> {
    let config = LoupeConfig::load(&args)?;
    let preview = config.into_preview_config(&args.workspace);
    debug!(
        workspace = %preview.workspace_root.display(),
        staging = %preview.staging_dir.display(),
        theme = %preview.theme_dir().display(),
        url = %preview.server_url(),
        "resolved preview configuration"
    );

    std::fs::create_dir_all(&preview.staging_dir)?;

    let registry = PreviewRegistry::new();
    let manager = registry.get_or_create(preview)?;

    ui::info("Starting preview server...");
    match &args.component {
        Some(path) => {
            let descriptor = utils::read_descriptor(path)?;
            manager.update_component(descriptor).await?;
        }
        None => manager.start().await?,
    }

    info!(url = %manager.get_server_url(), state = ?manager.state(), "preview session started");
    ui::success(&format!(
        "Preview server running at {}",
        manager.get_server_url()
    ));
    if let Some(descriptor) = manager.get_current_component() {
        ui::info(&format!("Previewing component: {}", descriptor.name));
    }
    ui::info("Watching theme directory. Press Ctrl-C to stop.");

    tokio::signal::ctrl_c().await?;

    ui::info("Shutting down...");
    registry.dispose_all().await;
    ui::success("Preview server stopped");
    Ok(())
}
