//! Poller specs: new-alert surfacing across ticks and clean cancellation.

use crate::prelude::*;
use std::time::Duration;
use upkeep_adapters::FakeAlertSource;
use upkeep_core::NewNotification;
use upkeep_engine::start_poller;

#[tokio::test]
async fn a_new_alert_between_ticks_surfaces_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_at(&dir.path().join("slot.json"), "n");
    let source = FakeAlertSource::new();

    let manual = registry.add(NewNotification::new("existing", ""));
    let shutdown = start_poller(registry.clone(), source.clone(), Duration::from_millis(25));

    // First tick: empty feed, nothing changes
    wait_until("first tick", || source.fetch_count() >= 1).await;
    assert_eq!(registry.len(), 1);

    // The provider starts reporting A2 before a later tick
    source.set_alerts(vec![pm_alert("A2")]);
    wait_until("A2 surfaced", || registry.len() == 2).await;

    // Exactly one new pm-alert entry; the existing entry survived
    let entries = registry.notifications();
    assert_eq!(entries[0].alert_id.as_deref(), Some("A2"));
    assert_eq!(entries[1].id, manual);

    // Repeated ticks with the same feed change nothing
    let fetches = source.fetch_count();
    wait_until("more ticks", || source.fetch_count() >= fetches + 3).await;
    assert_eq!(registry.len(), 2);
    let _ = shutdown.send(());
}

#[tokio::test]
async fn teardown_discards_a_pending_fetch_result() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_at(&dir.path().join("slot.json"), "n");
    let source = FakeAlertSource::new();
    source.set_alerts(vec![pm_alert("A1")]);
    source.set_delay(Duration::from_millis(300));

    let shutdown = start_poller(registry.clone(), source.clone(), Duration::from_secs(600));
    wait_until("fetch in flight", || source.fetch_count() == 1).await;

    // Tear down before the fetch resolves
    let _ = shutdown.send(());
    tokio::time::sleep(Duration::from_millis(500)).await;

    // The eventual result was dropped, not merged
    assert!(registry.is_empty());
    assert_eq!(source.fetch_count(), 1);
}
