//! # CLI Command Implementations

use crate::config::AppConfig;
use crate::console::Console;
use staterec_core::{Registry, StateError};
use std::io;

// =============================================================================
// RUN COMMAND
// =============================================================================

/// Run the interactive console on stdin/stdout.
pub fn cmd_run(config: &AppConfig) -> Result<(), StateError> {
    if config.console.banner {
        print_banner();
    }

    let registry = Registry::with_policy(config.registry.duplicates);
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    Console::new(stdin, stdout, registry)
        .with_json_mode(config.console.json_mode)
        .run()
}

// =============================================================================
// CONFIG COMMAND
// =============================================================================

/// Print the effective configuration.
pub fn cmd_config(config: &AppConfig) -> Result<(), StateError> {
    let output = serde_json::to_string_pretty(config)
        .map_err(|e| StateError::ConfigError(e.to_string()))?;
    println!("{}", output);
    Ok(())
}

/// Print the staterec startup banner.
fn print_banner() {
    println!(
        "staterec v{}\nIn-memory registry of base and extended state records.",
        env!("CARGO_PKG_VERSION")
    );
}
