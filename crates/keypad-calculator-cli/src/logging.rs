//! Log output for the CLI
//!
//! Events from the engine go to stderr so they never mix with the display
//! lines on stdout. `RUST_LOG` overrides the level picked by `-q`/`-v`.

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Picks the filter directive: `RUST_LOG` when set, the verbosity level otherwise
#[must_use]
pub fn filter_directive(verbosity: Verbosity, rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim) {
        Some(directive) if !directive.is_empty() => directive.to_string(),
        _ => verbosity.log_filter().to_string(),
    }
}

/// Installs the global subscriber
///
/// A second call is a no-op.
pub fn init_logging(verbosity: Verbosity) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(verbosity, rust_log.as_deref());
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_directive() {
        assert_eq!(filter_directive(Verbosity::Normal, None), "warn");
        assert_eq!(filter_directive(Verbosity::Trace, None), "trace");
    }

    #[test]
    fn test_rust_log_wins() {
        assert_eq!(
            filter_directive(Verbosity::Quiet, Some("keypad_calculator=debug")),
            "keypad_calculator=debug"
        );
    }

    #[test]
    fn test_blank_rust_log_is_ignored() {
        assert_eq!(filter_directive(Verbosity::Verbose, Some("  ")), "info");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(Verbosity::Quiet);
        init_logging(Verbosity::Debug);
    }
}
