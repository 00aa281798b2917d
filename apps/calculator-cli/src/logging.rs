//! Tracing subscriber setup for the `calc` binary.
//!
//! Logs always go to stderr; stdout is reserved for results.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Level implied by the `-v` count, if any (-v info, -vv debug, -vvv trace).
#[must_use]
pub fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Builds the filter: `RUST_LOG` wins, then `-v`, then the configured level.
fn build_filter(cfg: &LoggingConfig, verbose: u8) -> EnvFilter {
    let level = verbosity_level(verbose).unwrap_or(cfg.console_level.as_str());
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber once per process.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(cfg, verbose))
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match cfg.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    if let Err(e) = result {
        eprintln!("failed to initialize logging: {e}");
    }
}
