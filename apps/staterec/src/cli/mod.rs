//! # staterec CLI Module
//!
//! This module implements the command-line interface for staterec.
//!
//! ## Available Commands
//!
//! - `run` - Start the interactive console (default)
//! - `config` - Print the effective configuration and exit

mod commands;

use crate::config::AppConfig;
use clap::{Parser, Subcommand};
use staterec_core::{DuplicatePolicy, StateError};
use std::path::{Path, PathBuf};

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// staterec - interactive registry of state records
///
/// Create, delete, and list base and extended records from a numbered menu.
#[derive(Parser, Debug)]
#[command(name = "staterec")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Duplicate identifier policy: "allow" or "reject"
    #[arg(long, global = true)]
    pub duplicates: Option<DuplicatePolicy>,

    /// Print listings as JSON (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive console
    Run,

    /// Print the effective configuration as JSON
    Config,
}

impl Cli {
    /// Load the configuration file and apply command-line overrides.
    pub fn effective_config(&self, dir: &Path) -> Result<AppConfig, StateError> {
        let mut config = AppConfig::resolve(self.config.as_deref(), dir)?;

        if let Some(policy) = self.duplicates {
            config.registry.duplicates = policy;
        }
        if self.quiet {
            config.console.banner = false;
        }
        if self.json_mode {
            config.console.json_mode = true;
        }

        Ok(config)
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), StateError> {
    let cwd = std::env::current_dir()?;
    let config = cli.effective_config(&cwd)?;

    match cli.command {
        Some(Commands::Config) => cmd_config(&config),
        Some(Commands::Run) | None => cmd_run(&config),
    }
}
