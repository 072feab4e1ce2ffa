//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::Path;
use std::time::Duration;
use upkeep_core::{FakeClock, PmAlert, SequentialIdGen};
use upkeep_engine::NotificationRegistry;
use upkeep_storage::NotificationStore;

// Spec polling timeouts
pub const SPEC_POLL_INTERVAL_MS: u64 = 10;
pub const SPEC_WAIT_MAX_MS: u64 = 5000;

pub type SpecRegistry = NotificationRegistry<SequentialIdGen, FakeClock>;

/// Registry over the given slot, with deterministic ids and a fake clock.
///
/// Use a distinct prefix per load so ids stay unique across a simulated
/// restart of the same slot.
pub fn registry_at(path: &Path, prefix: &str) -> SpecRegistry {
    NotificationRegistry::load_with(
        NotificationStore::new(path),
        SequentialIdGen::new(prefix),
        FakeClock::new(),
    )
    .unwrap()
}

pub fn pm_alert(id: &str) -> PmAlert {
    PmAlert {
        id: id.to_string(),
        name: Some(format!("Pump {}", id)),
        days_until: Some(3),
        ..Default::default()
    }
}

/// Poll until the probe holds or the spec wait budget runs out.
pub async fn wait_until(what: &str, mut probe: impl FnMut() -> bool) {
    let rounds = SPEC_WAIT_MAX_MS / SPEC_POLL_INTERVAL_MS;
    for _ in 0..rounds {
        if probe() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(SPEC_POLL_INTERVAL_MS)).await;
    }
    panic!("timed out waiting for {}", what);
}
