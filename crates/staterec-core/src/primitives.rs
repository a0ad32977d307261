//! # Rendering Primitives
//!
//! Hardcoded text used when records describe themselves.
//!
//! These strings are part of the observable output of the console and of
//! `Registry::list_all`, so changing them changes every transcript.

/// Label preceding a record's identifier.
pub const IDENTIFIER_LABEL: &str = "ID";

/// Label preceding a record's primary state.
pub const PRIMARY_STATE_LABEL: &str = "State";

/// Label preceding an extended record's secondary state.
pub const SECONDARY_STATE_LABEL: &str = "Additional State";

/// Separator between `label: value` pairs in a description.
pub const FIELD_SEPARATOR: &str = ", ";

/// Reported in place of a listing when the registry holds no records.
pub const EMPTY_LISTING_MESSAGE: &str = "No records found!";
