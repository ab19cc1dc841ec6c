//! Property tests for bookmark toggling and persistence.

use std::sync::Arc;

use proptest::prelude::*;

use staffdeck::infrastructure::{InMemoryStoreRepository, JsonStoreRepository};
use staffdeck::{EmployeeId, EmployeeStore};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: toggling the same id twice leaves the bookmark set unchanged.
    #[test]
    fn property_toggle_twice_is_identity(
        initial in prop::collection::vec(0u32..50, 0..10),
        id in 0u32..50,
    ) {
        let mut store = EmployeeStore::new(Arc::new(InMemoryStoreRepository::new()));
        for raw in &initial {
            if !store.is_bookmarked(EmployeeId::new(*raw)) {
                store.toggle_bookmark(EmployeeId::new(*raw)).unwrap();
            }
        }
        let before = store.bookmark_ids().clone();

        let first = store.toggle_bookmark(EmployeeId::new(id)).unwrap();
        let second = store.toggle_bookmark(EmployeeId::new(id)).unwrap();

        prop_assert_ne!(first, second);
        prop_assert_eq!(store.bookmark_ids(), &before);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after any toggle sequence, a restored store sees the same bookmarks.
    #[test]
    fn property_bookmarks_survive_restore(
        toggles in prop::collection::vec(0u32..20, 0..20),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = EmployeeStore::new(Arc::new(JsonStoreRepository::with_path(path.clone())));
        for raw in &toggles {
            store.toggle_bookmark(EmployeeId::new(*raw)).unwrap();
        }

        let restored = EmployeeStore::restore(Arc::new(JsonStoreRepository::with_path(path)));
        prop_assert_eq!(restored.bookmark_ids(), store.bookmark_ids());

        // Each id is bookmarked iff it was toggled an odd number of times.
        for raw in 0u32..20 {
            let count = toggles.iter().filter(|t| **t == raw).count();
            prop_assert_eq!(restored.is_bookmarked(EmployeeId::new(raw)), count % 2 == 1);
        }
    }
}
