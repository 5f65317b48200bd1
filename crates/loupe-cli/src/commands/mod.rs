//! Command implementations for the Loupe CLI.
//!
//! - [`preview`] - Preview dev server with theme watching
//! - [`scan`] - Theme scanning and stylesheet output
//! - [`entry`] - Entry-point generation for a component descriptor
//!
//! Each command provides an `execute` function that takes the parsed
//! command arguments and returns a Result.

pub mod entry;
pub mod preview;
pub mod scan;
mod utils;

// Re-export execute functions for convenience
pub use entry::execute as entry_execute;
pub use preview::execute as preview_execute;
pub use scan::execute as scan_execute;
