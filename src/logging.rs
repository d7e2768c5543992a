//! Logging setup.
//!
//! Logs go to stderr so stdout carries only the assembled prompt.
//!
//! Filter priority: `RUST_LOG` > `--debug` > config `log_level` > "warn".

use tracing_subscriber::EnvFilter;

/// Pick the filter directive without touching global state.
pub fn filter_directive(
    env_value: Option<&str>,
    debug_flag: bool,
    config_level: Option<&str>,
) -> String {
    if let Some(env) = env_value.filter(|v| !v.trim().is_empty()) {
        env.to_string()
    } else if debug_flag {
        "debug".to_string()
    } else if let Some(level) = config_level.filter(|v| !v.trim().is_empty()) {
        level.to_string()
    } else {
        crate::config::DEFAULT_LOG_LEVEL.to_string()
    }
}

/// Initialise the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let env_value = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(env_value.as_deref(), debug_flag, config_level);

    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        filter = %directive,
        "logging initialised"
    );
}
