//! Tracing subscriber setup

use crate::config::LoggingConfig;
use std::env;
use tracing_subscriber::EnvFilter;

/// Filter directive for the configured level, merged with `RUST_LOG`
///
/// A `RUST_LOG` that already mentions `inkgrid` wins outright; otherwise
/// the configured level is appended for the `inkgrid` target.
pub fn filter_directive(config: &LoggingConfig, env_override: Option<&str>) -> String {
    let default_directive = format!("inkgrid={}", config.level.to_lowercase());
    match env_override.map(str::trim) {
        None | Some("") => default_directive,
        Some(over) if over.contains("inkgrid") => over.to_string(),
        Some(over) => format!("{},{}", over, default_directive),
    }
}

/// Install the fmt subscriber on stderr; later calls are no-ops
pub fn init(config: &LoggingConfig) {
    let env_override = env::var("RUST_LOG").ok();
    let directive = filter_directive(config, env_override.as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
