use proptest::prelude::*;

use crate::domain::{rotate, test_gens, test_prelude, Direction};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: stepping forward then backward returns to the start,
    /// including across the wrap boundary.
    #[test]
    fn prop_forward_then_backward_is_identity(
        (catalog, index) in test_gens::catalog_with_index(),
    ) {
        let start = catalog.get(index).unwrap().clone();
        let there = rotate(&catalog, start.name(), Direction::Forward);
        let back = rotate(&catalog, there.name(), Direction::Backward);
        prop_assert_eq!(back, start);
    }

    /// Property: rotation never leaves a non-empty catalog.
    #[test]
    fn prop_rotation_stays_in_catalog(
        (catalog, index) in test_gens::catalog_with_index(),
        direction in test_gens::direction(),
    ) {
        let current = catalog.get(index).unwrap().name().to_string();
        let next = rotate(&catalog, &current, direction);
        prop_assert!(!next.is_unknown());
        prop_assert!(catalog.find(next.name()).is_some());
    }

    /// Property: the ends wrap onto each other.
    #[test]
    fn prop_boundaries_wrap(catalog in test_gens::non_empty_catalog()) {
        let first = catalog.first().unwrap().clone();
        let last = catalog.last().unwrap().clone();
        prop_assert_eq!(rotate(&catalog, last.name(), Direction::Forward), first.clone());
        prop_assert_eq!(rotate(&catalog, first.name(), Direction::Backward), last);
    }

    /// Property: |catalog| forward steps visit every entry once and come home.
    #[test]
    fn prop_full_cycle_visits_every_entry(
        (catalog, index) in test_gens::catalog_with_index(),
    ) {
        let start = catalog.get(index).unwrap().clone();
        let mut seen = std::collections::HashSet::new();
        let mut current = start.clone();
        for _ in 0..catalog.len() {
            prop_assert!(seen.insert(current.clone()), "revisited {} early", current);
            current = rotate(&catalog, current.name(), Direction::Forward);
        }
        prop_assert_eq!(current, start);
        prop_assert_eq!(seen.len(), catalog.len());
    }
}
