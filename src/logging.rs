//! Tracing setup for the `rosa` binary.
//!
//! Logs go to stderr so report output on stdout stays pipeable. `RUST_LOG`
//! overrides the level passed on the command line.

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::AppError;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub fn init_tracing(level: &str) -> Result<(), AppError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| AppError::new(2, format!("Invalid log level '{level}': {e}")))?,
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false);

    // A subscriber set earlier (tests, embedding) is fine.
    if let Err(e) = Registry::default().with(env_filter).with(stderr_layer).try_init() {
        let msg = e.to_string();
        if !msg.contains("already been set") {
            return Err(AppError::new(2, format!("Failed to initialize tracing: {e}")));
        }
    }
    Ok(())
}
