//! # Core Type Definitions
//!
//! This module contains the shared types for the staterec registry:
//! - Record classification (`RecordKind`)
//! - Registry configuration (`DuplicatePolicy`)
//! - Error types (`StateError`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// RECORD KIND
// =============================================================================

/// The variant tag of a record held by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// A record with an identifier and a primary state.
    Base,
    /// A base record plus an independent secondary state.
    Extended,
}

impl RecordKind {
    /// Lowercase name used in console messages and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Extended => "extended",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// DUPLICATE POLICY
// =============================================================================

/// How the registry treats a create whose identifier is already present.
///
/// - `Allow`: duplicates are stored; delete removes the earliest match.
/// - `Reject`: the create fails with `StateError::DuplicateIdentifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Store records with repeated identifiers.
    #[default]
    Allow,
    /// Refuse records whose identifier is already in use.
    Reject,
}

impl DuplicatePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuplicatePolicy {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(Self::Allow),
            "reject" => Ok(Self::Reject),
            other => Err(StateError::ConfigError(format!(
                "Unknown duplicate policy '{}' (expected 'allow' or 'reject')",
                other
            ))),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the staterec system.
///
/// Only `ConfigError` and `IoError` are fatal to the console loop; every
/// other variant is reported to the user and the loop continues.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// No record with the given identifier exists.
    #[error("Record with ID {0} not found!")]
    RecordNotFound(String),

    /// A record with the given identifier already exists (`Reject` policy only).
    #[error("Record with ID {0} already exists!")]
    DuplicateIdentifier(String),

    /// A menu number outside the offered range was chosen.
    #[error("Invalid choice! Try again.")]
    InvalidMenuChoice(i64),

    /// Console input could not be parsed as the expected type.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The configuration file or a configuration flag is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl StateError {
    /// Whether the console loop must stop on this error.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::ConfigError(_) | Self::IoError(_))
    }
}

impl From<std::io::Error> for StateError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================
