//! Logging infrastructure for the Loupe CLI.
//!
//! Structured logging setup using the `tracing` ecosystem. Supports
//! verbosity flags, colored output, and `RUST_LOG`-based overrides.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at program start, before any logging occurs.
///
/// # Verbosity Levels
///
/// 1. `--verbose` flag: DEBUG for loupe crates
/// 2. `--quiet` flag: errors only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for loupe crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("loupe_theme=debug,loupe_gen=debug,loupe_server=debug,loupe_cli=debug")
    } else if quiet {
        EnvFilter::new("loupe_server=error,loupe_cli=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("loupe_theme=info,loupe_gen=info,loupe_server=info,loupe_cli=info")
        })
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Initialize logger with a custom environment filter. Useful for tests and
/// embedding contexts that need precise control over filtering.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // tracing is global and can only be initialized once per process, so
    // these only verify filter construction.

    #[test]
    fn test_env_filter_verbose() {
        let _filter =
            EnvFilter::new("loupe_theme=debug,loupe_gen=debug,loupe_server=debug,loupe_cli=debug");
    }

    #[test]
    fn test_env_filter_quiet() {
        let _filter = EnvFilter::new("loupe_server=error,loupe_cli=error");
    }
}
