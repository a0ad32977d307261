//! # staterec-core
//!
//! The in-memory record registry for staterec - THE LOGIC.
//!
//! This crate holds a flat, insertion-ordered collection of state records.
//! Two record kinds exist: a base record carrying an identifier and a primary
//! state, and an extended record that adds a secondary state. Both render
//! themselves through the [`Describe`] trait.
//!
//! ## Architectural Constraints
//!
//! - The [`Registry`] is the ONLY owner of records; they are created through it
//! - Lookup is a linear scan by identifier, first match wins
//! - No async, no I/O, no logging (the binary owns all console interaction)

// =============================================================================
// MODULES
// =============================================================================

pub mod primitives;
pub mod record;
pub mod registry;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{DuplicatePolicy, RecordKind, StateError};

// =============================================================================
// RE-EXPORTS: Records & Registry
// =============================================================================

pub use record::{Describe, ExtendedStateRecord, Record, StateRecord};
pub use registry::{Descriptions, Listing, Registry};
