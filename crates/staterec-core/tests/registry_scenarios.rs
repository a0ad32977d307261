//! # Registry Scenario Tests (R0-R3)
//!
//! ## Tiers
//! - R0: Creation and ordering
//! - R1: Deletion by identifier
//! - R2: Duplicate identifiers
//! - R3: Live mutation

use staterec_core::{Describe, DuplicatePolicy, Listing, Registry, StateError};

fn lines(registry: &Registry) -> Vec<String> {
    registry.list_all().into_lines()
}

// =============================================================================
// TIER R0: CREATION AND ORDERING
// =============================================================================

mod r0_creation {
    use super::*;

    /// R0.1: A new record is appended after every existing line.
    #[test]
    fn create_appends_exactly_one_line_at_end() {
        let mut registry = Registry::new();
        registry.create_base("a", 1).expect("create");
        let before = lines(&registry);

        registry.create_extended("b", 2, 9).expect("create");
        let after = lines(&registry);

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after[..before.len()], before[..]);
        assert_eq!(
            after.last().map(String::as_str),
            Some("ID: b, State: 2, Additional State: 9")
        );
    }

    /// R0.2: Empty registry reports the explicit empty condition.
    #[test]
    fn empty_registry_is_not_an_empty_listing() {
        let registry = Registry::new();
        assert!(matches!(registry.list_all(), Listing::Empty));
    }

    /// R0.3: Empty identifiers are accepted without validation.
    #[test]
    fn empty_identifier_accepted() {
        let mut registry = Registry::new();
        let record = registry.create_base("", 0).expect("create");
        assert_eq!(record.describe(), "ID: , State: 0");
    }
}

// =============================================================================
// TIER R1: DELETION
// =============================================================================

mod r1_deletion {
    use super::*;

    /// R1.1: The reference walkthrough.
    #[test]
    fn create_list_delete_walkthrough() {
        let mut registry = Registry::new();
        registry.create_base("a", 1).expect("create");
        registry.create_extended("b", 2, 9).expect("create");

        assert_eq!(
            lines(&registry),
            vec!["ID: a, State: 1", "ID: b, State: 2, Additional State: 9"]
        );

        assert!(registry.delete_by_identifier("a").is_ok());
        assert_eq!(
            lines(&registry),
            vec!["ID: b, State: 2, Additional State: 9"]
        );

        let before = lines(&registry);
        let result = registry.delete_by_identifier("a");
        assert_eq!(result, Err(StateError::RecordNotFound("a".into())));
        assert_eq!(lines(&registry), before);
    }

    /// R1.2: Deleting a present identifier shrinks the listing by one.
    #[test]
    fn delete_present_identifier_removes_it() {
        let mut registry = Registry::new();
        registry.create_base("x", 1).expect("create");
        registry.create_base("y", 2).expect("create");

        let removed = registry.delete_by_identifier("x").expect("delete");
        assert_eq!(removed.identifier(), "x");
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("x"));
    }

    /// R1.3: Identifier matching is case-sensitive and exact.
    #[test]
    fn delete_is_case_sensitive() {
        let mut registry = Registry::new();
        registry.create_base("Key", 1).expect("create");

        assert!(registry.delete_by_identifier("key").is_err());
        assert!(registry.delete_by_identifier("Ke").is_err());
        assert!(registry.delete_by_identifier("Key").is_ok());
    }

    /// R1.4: Deleting the last record returns to the empty condition.
    #[test]
    fn delete_last_record_empties_registry() {
        let mut registry = Registry::new();
        registry.create_base("only", 1).expect("create");
        registry.delete_by_identifier("only").expect("delete");

        assert!(registry.list_all().is_empty());
    }
}

// =============================================================================
// TIER R2: DUPLICATE IDENTIFIERS
// =============================================================================

mod r2_duplicates {
    use super::*;

    /// R2.1: First match wins; a second delete removes the next one.
    #[test]
    fn duplicates_are_deleted_oldest_first() {
        let mut registry = Registry::new();
        registry.create_base("d", 1).expect("create");
        registry.create_base("other", 0).expect("create");
        registry.create_extended("d", 2, 3).expect("create");

        let first = registry.delete_by_identifier("d").expect("first");
        assert_eq!(first.primary_state(), 1);
        assert_eq!(
            lines(&registry),
            vec!["ID: other, State: 0", "ID: d, State: 2, Additional State: 3"]
        );

        let second = registry.delete_by_identifier("d").expect("second");
        assert_eq!(second.secondary_state(), Some(3));
        assert_eq!(lines(&registry), vec!["ID: other, State: 0"]);
    }

    /// R2.2: Reject policy leaves the listing unchanged on a duplicate create.
    #[test]
    fn reject_policy_keeps_listing_unchanged() {
        let mut registry = Registry::with_policy(DuplicatePolicy::Reject);
        registry.create_base("d", 1).expect("create");
        let before = lines(&registry);

        let result = registry.create_base("d", 2).map(|r| r.primary_state());
        assert_eq!(result, Err(StateError::DuplicateIdentifier("d".into())));
        assert_eq!(lines(&registry), before);
    }
}

// =============================================================================
// TIER R3: LIVE MUTATION
// =============================================================================

mod r3_mutation {
    use super::*;

    /// R3.1: Setter changes show up in the next listing.
    #[test]
    fn mutation_reflected_without_recreation() {
        let mut registry = Registry::new();
        registry.create_base("a", 1).expect("create");
        registry.create_extended("b", 2, 9).expect("create");

        if let Some(record) = registry.get_mut("a") {
            record.set_primary_state(-4);
        }
        if let Some(record) = registry.get_mut("b") {
            record.set_secondary_state(0);
        }

        assert_eq!(
            lines(&registry),
            vec!["ID: a, State: -4", "ID: b, State: 2, Additional State: 0"]
        );
    }

    /// R3.2: Each list_all call renders fresh state.
    #[test]
    fn listing_is_recomputed_per_call() {
        let mut registry = Registry::new();
        registry.create_base("a", 1).expect("create");
        let first = lines(&registry);

        if let Some(record) = registry.get_mut("a") {
            record.set_primary_state(2);
        }

        assert_ne!(lines(&registry), first);
    }
}
