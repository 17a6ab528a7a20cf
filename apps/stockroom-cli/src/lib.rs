//! # Stockroom Console Library
//!
//! Wires configuration, logging and the menu loop together. The binary in
//! `main.rs` only calls [`run`].
//!
//! ## Module Organization
//! ```text
//! stockroom_cli/
//! ├── lib.rs          ◄─── You are here (startup & session)
//! ├── config.rs       ◄─── Command line flags
//! ├── console.rs      ◄─── Prompts and validated readers
//! ├── menu.rs         ◄─── Menu loop and dispatch
//! ├── commands/
//! │   ├── product.rs  ◄─── Display / add / remove / restock
//! │   └── purchase.rs ◄─── Purchase flow
//! └── error.rs        ◄─── CliError
//! ```
//!
//! ## Startup Sequence
//! 1. Parse flags
//! 2. Initialize tracing (stderr)
//! 3. Build the store (seeded unless `--empty`)
//! 4. Run the menu over locked stdin / stdout

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub use config::AppConfig;
pub use console::Console;
pub use error::{CliError, CliResult};

/// Runs the interactive application on the process's stdin and stdout.
pub fn run() -> CliResult<()> {
    let config = AppConfig::parse();
    init_tracing(&config)?;

    info!(?config, "starting stockroom");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), &config)
}

/// Runs one menu session over the given input and output.
///
/// The store is created here and lives exactly as long as the session.
/// A closed input stream ends the session normally.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: W,
    config: &AppConfig,
) -> CliResult<()> {
    let mut inventory = config.initial_inventory();
    let mut console = Console::new(input, output);

    match menu::run_menu(&mut console, &mut inventory) {
        Err(CliError::InputClosed) => {
            warn!(products = inventory.len(), "input closed, ending session");
            Ok(())
        }
        other => other,
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_core=info` - Show store mutations only
/// - Otherwise `--log-filter`, default `warn`
///
/// Logs go to stderr; stdout carries only the operator transcript.
fn init_tracing(config: &AppConfig) -> CliResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}
