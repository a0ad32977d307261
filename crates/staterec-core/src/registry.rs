//! # Registry
//!
//! The owning, insertion-ordered container of records.
//!
//! The registry keeps every record in a single `Vec`. There is no secondary
//! index: lookups and deletes scan from the front and act on the first record
//! whose identifier matches exactly (case-sensitive).
//!
//! Whether repeated identifiers are tolerated is decided by the registry's
//! `DuplicatePolicy`.

use crate::{Describe, DuplicatePolicy, ExtendedStateRecord, Record, StateError, StateRecord};
use std::slice;

// =============================================================================
// LISTING
// =============================================================================

/// The outcome of `Registry::list_all`.
///
/// An empty registry is reported as `Listing::Empty`, never as an empty
/// iterator.
#[derive(Debug)]
pub enum Listing<'a> {
    /// The registry holds no records.
    Empty,
    /// Descriptions of every record, in insertion order.
    Entries(Descriptions<'a>),
}

impl Listing<'_> {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Collect the listing into owned lines; `Empty` yields no lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Self::Empty => Vec::new(),
            Self::Entries(descriptions) => descriptions.collect(),
        }
    }
}

/// Lazy iterator over record descriptions.
///
/// Each description is rendered on demand from the live record, so a fresh
/// `list_all` call always reflects the latest state.
#[derive(Debug)]
pub struct Descriptions<'a> {
    inner: slice::Iter<'a, Record>,
}

impl Iterator for Descriptions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Describe::describe)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Descriptions<'_> {}

// =============================================================================
// REGISTRY
// =============================================================================

/// An ordered collection of owned records.
///
/// Records are created only through `create_base` / `create_extended` and
/// dropped when deleted or when the registry itself is dropped.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Records in insertion order.
    records: Vec<Record>,
    /// Treatment of repeated identifiers on create.
    policy: DuplicatePolicy,
}

impl Registry {
    /// Create an empty registry that allows duplicate identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given duplicate policy.
    #[must_use]
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            records: Vec::new(),
            policy,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Append a base record.
    ///
    /// Returns the stored record so the caller can report the identifier used.
    /// Fails only under `DuplicatePolicy::Reject` when the identifier is taken.
    pub fn create_base(
        &mut self,
        identifier: impl Into<String>,
        primary_state: i64,
    ) -> Result<&Record, StateError> {
        self.push(StateRecord::new(identifier, primary_state).into())
    }

    /// Append an extended record. Same acceptance rules as `create_base`.
    pub fn create_extended(
        &mut self,
        identifier: impl Into<String>,
        primary_state: i64,
        secondary_state: i64,
    ) -> Result<&Record, StateError> {
        self.push(ExtendedStateRecord::new(identifier, primary_state, secondary_state).into())
    }

    fn push(&mut self, record: Record) -> Result<&Record, StateError> {
        if self.policy == DuplicatePolicy::Reject && self.contains(record.identifier()) {
            return Err(StateError::DuplicateIdentifier(
                record.identifier().to_string(),
            ));
        }

        let index = self.records.len();
        self.records.push(record);
        Ok(&self.records[index])
    }

    /// Remove the first record whose identifier equals `identifier`.
    ///
    /// Returns the removed record. When nothing matches the registry is left
    /// unchanged and `StateError::RecordNotFound` is returned.
    pub fn delete_by_identifier(&mut self, identifier: &str) -> Result<Record, StateError> {
        let position = self
            .position(identifier)
            .ok_or_else(|| StateError::RecordNotFound(identifier.to_string()))?;

        Ok(self.records.remove(position))
    }

    /// Describe every record in insertion order.
    ///
    /// Returns `Listing::Empty` when the registry holds nothing.
    #[must_use]
    pub fn list_all(&self) -> Listing<'_> {
        if self.records.is_empty() {
            return Listing::Empty;
        }

        Listing::Entries(Descriptions {
            inner: self.records.iter(),
        })
    }

    /// The first record with the given identifier.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.identifier() == identifier)
    }

    /// Mutable access to the first record with the given identifier.
    pub fn get_mut(&mut self, identifier: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.identifier() == identifier)
    }

    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.position(identifier).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the held records in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    fn position(&self, identifier: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.identifier() == identifier)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
