use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global subscriber. `RUST_LOG`, when set, wins over the configured level.
///
/// # Errors
/// Returns an error if `RUST_LOG` or the configured level is not a valid filter,
/// or a subscriber is already installed.
pub fn init_logging(cfg: &LoggingConfig) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), &cfg.level)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match cfg.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

/// An explicit `RUST_LOG` is never silently replaced by the configured level.
fn build_filter(rust_log: Option<&str>, level: &str) -> Result<EnvFilter> {
    match rust_log.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid {} directive '{directives}'", EnvFilter::DEFAULT_ENV)),
        None => EnvFilter::try_new(level)
            .with_context(|| format!("invalid logging.level directive '{level}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn config_level_used_without_rust_log() {
        let filter = build_filter(None, "debug").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn blank_rust_log_counts_as_unset() {
        let filter = build_filter(Some("  "), "warn").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn rust_log_overrides_config_level() {
        let filter = build_filter(Some("trace"), "info").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn invalid_rust_log_is_an_error() {
        let err = build_filter(Some("remainder_server=loudest"), "info").unwrap_err();
        assert!(err.to_string().contains("invalid RUST_LOG directive"));
    }

    #[test]
    fn invalid_config_level_is_an_error() {
        let err = build_filter(None, "api_gateway=chatty").unwrap_err();
        assert!(err.to_string().contains("invalid logging.level directive"));
    }
}
