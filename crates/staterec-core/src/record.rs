//! # Records
//!
//! The two record variants held by the registry and the `Describe` trait
//! they share.
//!
//! `StateRecord` is the base kind. `ExtendedStateRecord` embeds a base record
//! and adds a secondary state; every operation except `describe` is
//! delegated to the embedded base. `Record` is the tagged union the
//! registry actually stores.

use crate::primitives::{
    FIELD_SEPARATOR, IDENTIFIER_LABEL, PRIMARY_STATE_LABEL, SECONDARY_STATE_LABEL,
};
use crate::RecordKind;
use serde::Serialize;
use std::fmt;

// =============================================================================
// DESCRIBE TRAIT
// =============================================================================

/// Render a record as a single human-readable line.
pub trait Describe {
    /// The one-line description shown by the console listing.
    fn describe(&self) -> String;
}

// =============================================================================
// BASE RECORD
// =============================================================================

/// A record with an immutable identifier and a mutable primary state.
///
/// The identifier is never validated: empty strings and duplicates are
/// accepted here, and uniqueness is a registry concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateRecord {
    identifier: String,
    primary_state: i64,
}

impl StateRecord {
    /// Create a new base record.
    #[must_use]
    pub fn new(identifier: impl Into<String>, primary_state: i64) -> Self {
        Self {
            identifier: identifier.into(),
            primary_state,
        }
    }

    /// The lookup key of this record.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub const fn primary_state(&self) -> i64 {
        self.primary_state
    }

    /// Replace the primary state. Any value is accepted.
    pub fn set_primary_state(&mut self, new_value: i64) {
        self.primary_state = new_value;
    }
}

impl Describe for StateRecord {
    fn describe(&self) -> String {
        format!(
            "{}: {}{}{}: {}",
            IDENTIFIER_LABEL,
            self.identifier,
            FIELD_SEPARATOR,
            PRIMARY_STATE_LABEL,
            self.primary_state
        )
    }
}

// =============================================================================
// EXTENDED RECORD
// =============================================================================

/// A base record plus an independent secondary state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtendedStateRecord {
    #[serde(flatten)]
    base: StateRecord,
    secondary_state: i64,
}

impl ExtendedStateRecord {
    /// Create a new extended record.
    #[must_use]
    pub fn new(identifier: impl Into<String>, primary_state: i64, secondary_state: i64) -> Self {
        Self {
            base: StateRecord::new(identifier, primary_state),
            secondary_state,
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        self.base.identifier()
    }

    #[must_use]
    pub const fn primary_state(&self) -> i64 {
        self.base.primary_state()
    }

    #[must_use]
    pub const fn secondary_state(&self) -> i64 {
        self.secondary_state
    }

    pub fn set_primary_state(&mut self, new_value: i64) {
        self.base.set_primary_state(new_value);
    }

    /// Replace the secondary state without touching the primary one.
    pub fn set_secondary_state(&mut self, new_value: i64) {
        self.secondary_state = new_value;
    }
}

impl Describe for ExtendedStateRecord {
    fn describe(&self) -> String {
        format!(
            "{}{}{}: {}",
            self.base.describe(),
            FIELD_SEPARATOR,
            SECONDARY_STATE_LABEL,
            self.secondary_state
        )
    }
}

// =============================================================================
// RECORD (tagged union)
// =============================================================================

/// A record as stored by the registry: either kind, owned by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Base(StateRecord),
    Extended(ExtendedStateRecord),
}

impl Record {
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::Base(r) => r.identifier(),
            Self::Extended(r) => r.identifier(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Base(_) => RecordKind::Base,
            Self::Extended(_) => RecordKind::Extended,
        }
    }

    #[must_use]
    pub const fn primary_state(&self) -> i64 {
        match self {
            Self::Base(r) => r.primary_state(),
            Self::Extended(r) => r.primary_state(),
        }
    }

    /// The secondary state, present only on extended records.
    #[must_use]
    pub const fn secondary_state(&self) -> Option<i64> {
        match self {
            Self::Base(_) => None,
            Self::Extended(r) => Some(r.secondary_state()),
        }
    }

    pub fn set_primary_state(&mut self, new_value: i64) {
        match self {
            Self::Base(r) => r.set_primary_state(new_value),
            Self::Extended(r) => r.set_primary_state(new_value),
        }
    }

    /// Set the secondary state of an extended record.
    ///
    /// Returns `false` and leaves the record untouched for base records.
    pub fn set_secondary_state(&mut self, new_value: i64) -> bool {
        match self {
            Self::Base(_) => false,
            Self::Extended(r) => {
                r.set_secondary_state(new_value);
                true
            }
        }
    }
}

impl Describe for Record {
    fn describe(&self) -> String {
        match self {
            Self::Base(r) => r.describe(),
            Self::Extended(r) => r.describe(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<StateRecord> for Record {
    fn from(record: StateRecord) -> Self {
        Self::Base(record)
    }
}

impl From<ExtendedStateRecord> for Record {
    fn from(record: ExtendedStateRecord) -> Self {
        Self::Extended(record)
    }
}

// =============================================================================
// TESTS
// =============================================================================
