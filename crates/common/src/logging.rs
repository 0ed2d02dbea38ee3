//! Logging and tracing initialization.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Targets whose verbosity follows the configured level.
const SPECTATOR_TARGETS: [&str; 4] = [
    "spectator_common",
    "spectator_platform_core",
    "spectator_cursor_mapper",
    "spectator",
];

/// Expand a bare level (`"debug"`) into directives that apply it to the
/// spectator crates and keep everything else at `warn`. Strings that are
/// already directives (`"spectator_cursor_mapper=trace,warn"`) pass through.
pub fn filter_directives(level: &str) -> String {
    let level = level.trim();
    if level.is_empty() || level.contains('=') || level.contains(',') {
        return level.to_string();
    }

    let mut directives = vec!["warn".to_string()];
    directives.extend(SPECTATOR_TARGETS.iter().map(|t| format!("{t}={level}")));
    directives.join(",")
}

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG` takes precedence over `config.level`. Output goes to stderr
/// so JSON reports on stdout stay parseable. Installing a second global
/// subscriber is silently ignored.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(&config.level)));

    if config.json {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
}
