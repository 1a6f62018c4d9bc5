//! Diagnostics setup.
//!
//! Logs are written to stderr: stdout belongs to the ATM dialogue.

use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Initialize logging for the process. `RUST_LOG`, when set, wins over `level`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(level: tracing::Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from_level(level).into()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
