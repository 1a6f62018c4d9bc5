use clap::Parser;
use std::path::PathBuf;

/// A console ATM: log in, then deposit, withdraw and transfer money.
///
/// The dialogue happens on stdin/stdout; diagnostics go to stderr.
#[derive(Debug, Parser)]
#[command(name = "atm", version, about, long_about = None)]
pub struct Config {
    /// CSV file with `id,pin,balance` rows, used instead of the demo users
    #[arg(long, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Diagnostics level (RUST_LOG takes precedence)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: tracing::Level,
}
