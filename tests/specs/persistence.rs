//! Persistence specs: round-trip fidelity and restart recovery.

use crate::prelude::*;
use upkeep_core::{NewNotification, Priority};
use upkeep_storage::NotificationStore;

#[test]
fn slot_round_trips_ids_read_flags_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slot.json");
    let registry = registry_at(&path, "n");

    registry.add(NewNotification::new("oldest", ""));
    let middle = registry.add(NewNotification::new("middle", "").priority(Priority::High));
    registry.add(NewNotification::new("newest", ""));
    registry.mark_read(&middle);

    let saved = registry.notifications();
    let loaded = NotificationStore::new(&path).load().unwrap();
    assert_eq!(loaded, saved);
}

#[test]
fn restart_reproduces_the_unread_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slot.json");

    let before = {
        let registry = registry_at(&path, "n");
        for i in 0..5 {
            registry.add(NewNotification::new(format!("t{}", i), ""));
        }
        let ids: Vec<_> = registry.notifications().iter().map(|n| n.id.clone()).collect();
        registry.mark_read(&ids[2]);
        registry.mark_read(&ids[4]);
        (registry.len(), registry.unread_count())
    };
    assert_eq!(before, (5, 3));

    // Fresh process: a new registry over the same slot
    let restarted = registry_at(&path, "m");
    assert_eq!(restarted.len(), 5);
    assert_eq!(restarted.unread_count(), 3);
}

#[test]
fn first_load_of_an_absent_slot_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_at(&dir.path().join("never-written.json"), "n");
    assert!(registry.is_empty());
    assert_eq!(registry.unread_count(), 0);
}

#[test]
fn first_load_of_an_incompatible_slot_is_empty_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slot.json");
    std::fs::write(&path, r#"{"not": "a collection"}"#).unwrap();

    let registry = registry_at(&path, "n");
    assert!(registry.is_empty());

    // The unreadable slot was quarantined, and new writes go through
    registry.add(NewNotification::new("fresh start", ""));
    assert_eq!(NotificationStore::new(&path).load().unwrap().len(), 1);
    assert!(path.with_extension("bak").exists());
}
