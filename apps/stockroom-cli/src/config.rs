//! # Configuration
//!
//! Session settings taken from the command line.
//!
//! ## Configuration Sources (Priority Order)
//! 1. `RUST_LOG` (log filter only)
//! 2. Command line flags
//! 3. Defaults (this file)
//!
//! Nothing is read from or written to disk.

use clap::Parser;
use stockroom_core::Inventory;

/// Log filter used when neither `RUST_LOG` nor `--log-filter` is given.
///
/// Kept at `warn` so an interactive terminal is not flooded.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "stockroom", version, about = "Interactive in-memory inventory manager")]
pub struct AppConfig {
    /// Start with an empty store instead of the launch catalogue
    #[arg(long)]
    pub empty: bool,

    /// Tracing filter used when RUST_LOG is unset (logs go to stderr)
    #[arg(long, value_name = "FILTER", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl Default for AppConfig {
    /// Seeded store, `warn` logging.
    fn default() -> Self {
        AppConfig {
            empty: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Builds the store the session starts from.
    pub fn initial_inventory(&self) -> Inventory {
        if self.empty {
            Inventory::new()
        } else {
            Inventory::seeded()
        }
    }
}
