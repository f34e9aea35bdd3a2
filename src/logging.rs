//! Diagnostic logging via `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so they never mix with command output on stdout.
//!
//! # Log Levels
//!
//! - `warn`: a resource fell back (missing file, HTTP error, bad JSON)
//! - `info`: load and build progress, page counts
//! - `debug`: dispatched events, each written page
//! - `trace`: everything, including dependencies
//!
//! `RUST_LOG` overrides the verbosity flag when set.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map the CLI `-v` count to a level.
///
/// - 0: warn
/// - 1 (`-v`): info
/// - 2 (`-vv`): debug
/// - 3+ (`-vvv`): trace
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Call once, at startup.
///
/// A second call is ignored.
pub fn init_logging(verbosity: u8) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();
    let _ = tracing_subscriber::registry()
        .with(build_env_filter(level_for(verbosity)))
        .with(layer)
        .try_init();
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives(level))
}

/// Our crate at `level`; dependencies stay at warn unless tracing everything.
fn default_directives(level: Level) -> EnvFilter {
    let level = level.as_str().to_lowercase();
    if level == "trace" {
        EnvFilter::new("trace")
    } else {
        EnvFilter::new(format!("warn,folio={level}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::INFO);
        assert_eq!(level_for(2), Level::DEBUG);
        assert_eq!(level_for(3), Level::TRACE);
        assert_eq!(level_for(9), Level::TRACE);
    }

    #[test]
    fn default_directives_scope_our_crate() {
        let info = default_directives(Level::INFO).to_string();
        assert!(info.contains("folio=info"));
        assert!(info.contains("warn"));
        assert_eq!(default_directives(Level::TRACE).to_string(), "trace");
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(0);
        init_logging(2);
    }
}
