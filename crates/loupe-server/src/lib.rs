//! Preview dev-server orchestration.
//!
//! Ties the token and generation crates to a real dev-server process: spawns
//! it against a staging directory, watches the workspace theme directory, and
//! regenerates the staged stylesheet and entry point on every relevant
//! change.
//!
//! Entry points are [`PreviewRegistry`] for multi-workspace hosts and
//! [`PreviewManager`] for direct single-workspace use.

mod config;
mod error;
mod manager;
mod process;
mod registry;
mod scan;
mod watcher;

pub use config::{PreviewConfig, ENTRY_FILE, SAFELIST_FILE, THEME_SUBDIR};
pub use error::{Result, ServerError};
pub use manager::{PreviewManager, ServerState};
pub use registry::PreviewRegistry;
pub use scan::scan_theme_dir;
pub use watcher::{ThemeChange, ThemeWatcher};
