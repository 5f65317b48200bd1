//! Status messages for terminal output.
//!
//! Thin wrappers over the `console` crate. All messages go to stderr so
//! stdout stays clean for generated output (`loupe scan`, `loupe entry`).
//! Under `--quiet` only [`error`] still prints.

use console::style;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Apply the `--no-color` flag and the `NO_COLOR` convention globally.
pub fn init_colors(no_color: bool) {
    if no_color || std::env::var("NO_COLOR").is_ok() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
}

/// Apply the `--quiet` flag: suppress every message except errors.
pub fn init_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// True when non-error messages are suppressed.
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a success message to stderr.
pub fn success(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {}", style("ℹ").blue().bold(), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {}", style("⚠").yellow().bold(), style(message).yellow());
}

/// Print an error message to stderr. Never suppressed.
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), style(message).red());
}

#[cfg(test)]
mod tests {
    use super::*;

    // QUIET is process-global, so one test exercises both directions.
    #[test]
    fn test_quiet_flag_round_trip() {
        assert!(!is_quiet());
        init_quiet(true);
        assert!(is_quiet());
        init_quiet(false);
        assert!(!is_quiet());
    }
}
