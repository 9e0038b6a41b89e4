//! `tracing` subscriber setup shared by the binaries.

use tracing_subscriber::{fmt, EnvFilter};

/// Set to any value to emit JSON log lines.
pub const JSON_LOG_ENV: &str = "FLOWNET_LOG_JSON";

/// Initialise the `tracing` subscriber.
///
/// Logs go to stderr so they never interleave with the demo output on
/// stdout. The filter comes from `RUST_LOG`, defaulting to `flownet=info`.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flownet=info"));

    if std::env::var(JSON_LOG_ENV).is_ok() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
