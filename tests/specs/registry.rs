//! Registry invariant specs: cap, ordering, and unread accounting.

use crate::prelude::*;
use upkeep_core::NewNotification;
use upkeep_engine::MAX_NOTIFICATIONS;

#[test]
fn sixty_inserts_keep_the_fifty_most_recent() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_at(&dir.path().join("slot.json"), "n");

    for i in 1..=60 {
        registry.add(NewNotification::new(format!("notification {}", i), ""));
    }

    let entries = registry.notifications();
    assert_eq!(entries.len(), MAX_NOTIFICATIONS);
    // Newest first; the oldest ten were evicted
    assert_eq!(entries[0].id, "n-60");
    assert_eq!(entries[49].id, "n-11");
    assert!(!entries.iter().any(|n| n.id == "n-10"));
}

#[test]
fn unread_count_tracks_adds_and_mark_all_read() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_at(&dir.path().join("slot.json"), "n");

    registry.add(NewNotification::new("T", ""));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.unread_count(), 1);

    registry.mark_all_read();
    assert_eq!(registry.unread_count(), 0);
    assert_eq!(registry.len(), 1);
}

#[test]
fn removing_an_unread_entry_reduces_both_counts() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_at(&dir.path().join("slot.json"), "n");

    let id = registry.add(NewNotification::new("T", ""));
    registry.remove(&id);

    assert_eq!(registry.len(), 0);
    assert_eq!(registry.unread_count(), 0);

    // Removing again stays a no-op, counts never go below zero
    registry.remove(&id);
    assert_eq!(registry.unread_count(), 0);
}

#[test]
fn merging_the_same_feed_twice_inserts_once() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_at(&dir.path().join("slot.json"), "n");
    let feed = [pm_alert("A1")];

    registry.merge_pm_alerts(&feed);
    registry.merge_pm_alerts(&feed);

    let entries = registry.notifications();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].alert_id.as_deref(), Some("A1"));
    assert_eq!(entries[0].title, "PM Due Soon: Pump A1");
}
