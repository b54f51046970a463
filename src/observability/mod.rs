//! Structured logging setup.

use tracing_subscriber::EnvFilter;

/// Resolve the active log filter.
///
/// Precedence: an explicit `-v` override, then `RUST_LOG`, then
/// `default_filter` (normally the configured `logging.filter`). A filter
/// that fails to parse falls through to the next source, ending at
/// `graphwalk=info`.
pub fn build_filter(verbose_override: Option<&str>, default_filter: &str) -> EnvFilter {
    verbose_override
        .ok_or(())
        .and_then(|f| EnvFilter::try_new(f).map_err(|_| ()))
        .or_else(|_| EnvFilter::try_from_default_env().map_err(|_| ()))
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("graphwalk=info"))
}

/// Initialize structured logging.
///
/// Logs go to stderr so stdout stays clean for traversal output. Call once
/// at program startup; subsequent calls are silently ignored.
pub fn init_logging(verbose_override: Option<&str>, default_filter: &str) {
    let filter = build_filter(verbose_override, default_filter);

    // try_init so double-init in tests doesn't panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_override_beats_environment_and_config() {
        // Holds whether or not RUST_LOG is set in the test environment.
        let filter = build_filter(Some("graphwalk=trace"), "graphwalk=warn");
        assert_eq!(filter.to_string(), "graphwalk=trace");
    }

    #[test]
    fn configured_filter_applies_without_override_or_env() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = build_filter(None, "graphwalk=warn");
        assert_eq!(filter.to_string(), "graphwalk=warn");
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(Some("graphwalk=debug"), "graphwalk=info");
        init_logging(None, "graphwalk=info");
        tracing::debug!("still alive after double init");
    }

    #[test]
    fn invalid_filter_falls_back() {
        init_logging(None, "[[[not a filter");
    }
}
