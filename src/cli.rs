//! Command line shared by the three counter binaries.

use clap::error::ErrorKind;
use clap::Parser;

use crate::config::{WorkConfig, DEFAULT_TOTAL_COUNT};
use crate::errors::ConfigError;

/// Arguments accepted by every variant binary.
#[derive(Parser, Debug)]
#[command(about = "Shared-counter concurrency demo", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of worker threads
    #[arg(allow_negative_numbers = true)]
    pub thread_count: i64,

    /// Total number of increments distributed across the workers
    #[arg(long, default_value_t = DEFAULT_TOTAL_COUNT)]
    pub total_count: u64,
}

impl Cli {
    /// Parses argv, exiting the process on parse failure.
    ///
    /// The demos' contract is exit status 1 for a missing or malformed
    /// thread count, with nothing written to stdout; help and version
    /// requests still exit 0.
    pub fn parse_or_exit() -> Self {
        match Cli::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                let code = match err.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                    _ => 1,
                };
                let _ = err.print();
                std::process::exit(code);
            }
        }
    }

    /// Validates the parsed arguments into a [`WorkConfig`].
    pub fn config(&self) -> Result<WorkConfig, ConfigError> {
        WorkConfig::new(self.thread_count, self.total_count)
    }
}
