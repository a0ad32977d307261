//! # staterec
//!
//! The main binary for the staterec record registry.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive console
//! staterec
//!
//! # Refuse duplicate identifiers, print listings as JSON
//! staterec --duplicates reject --json-mode
//!
//! # Show the effective configuration
//! staterec --config staterec.toml config
//! ```

use clap::Parser;
use staterec::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // STATEREC_LOG_FORMAT=json enables machine-parseable output.
    // Logs go to stderr; stdout carries the console transcript.
    let log_format = std::env::var("STATEREC_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let default_filter = if cli.verbose {
        "staterec=debug"
    } else {
        "staterec=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
