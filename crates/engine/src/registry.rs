// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory notification registry.
//!
//! The registry is the authoritative store of user-facing notifications
//! and the only component that enforces the collection invariants:
//! unique ids, newest-first ordering, the retention cap, at most one
//! entry per preventive-maintenance alert, and the derived unread
//! count. Every mutation is written back to the store immediately.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};
use upkeep_core::{
    Clock, IdGen, NewNotification, Notification, NotificationId, PmAlert, Source, SystemClock,
    UuidIdGen,
};
use upkeep_storage::{NotificationStore, StoreError};

/// Maximum retained notifications; the oldest entries are evicted first.
pub const MAX_NOTIFICATIONS: usize = 50;

/// Authoritative in-memory store of user-facing notifications.
///
/// Clones share the same underlying collection, so a clone can be handed
/// to the poller while consumers keep mutating. Persistence is
/// fire-and-forget: a failed write is logged and never surfaced to the
/// caller.
#[derive(Clone)]
pub struct NotificationRegistry<I: IdGen = UuidIdGen, C: Clock = SystemClock> {
    entries: Arc<Mutex<Vec<Notification>>>,
    store: NotificationStore,
    id_gen: I,
    clock: C,
}

impl NotificationRegistry {
    /// Load the registry from its store with production id and clock sources.
    pub fn load(store: NotificationStore) -> Result<Self, StoreError> {
        Self::load_with(store, UuidIdGen, SystemClock)
    }
}

impl<I: IdGen, C: Clock> NotificationRegistry<I, C> {
    /// Load the registry from its store.
    ///
    /// The store is read exactly once, here; the registry owns the
    /// collection from this point on.
    pub fn load_with(store: NotificationStore, id_gen: I, clock: C) -> Result<Self, StoreError> {
        let entries = store.load()?;
        Ok(Self {
            entries: Arc::new(Mutex::new(entries)),
            store,
            id_gen,
            clock,
        })
    }

    /// Add a manually triggered notification.
    ///
    /// Assigns a fresh id and the current timestamp, marks it unread,
    /// and prepends it ahead of everything else. Cannot fail; inserting
    /// past the cap evicts the oldest entries regardless of read state.
    pub fn add(&self, new: NewNotification) -> NotificationId {
        let id = NotificationId::new(self.id_gen.next());
        let notification = Notification {
            id: id.clone(),
            timestamp: self.clock.now(),
            read: false,
            title: new.title,
            message: new.message,
            priority: new.priority,
            source: Source::Manual,
            alert_id: None,
            path: new.path,
        };

        let snapshot = {
            let mut entries = self.entries.lock();
            entries.insert(0, notification);
            entries.truncate(MAX_NOTIFICATIONS);
            entries.clone()
        };
        self.persist(&snapshot);
        id
    }

    /// Mark one notification as read.
    ///
    /// Unknown or already-read ids are a no-op, not an error. The read
    /// flag never flips back.
    pub fn mark_read(&self, id: &NotificationId) {
        let snapshot = {
            let mut entries = self.entries.lock();
            match entries.iter_mut().find(|n| n.id == *id && !n.read) {
                Some(entry) => {
                    entry.read = true;
                    Some(entries.clone())
                }
                None => None,
            }
        };
        if let Some(snapshot) = snapshot {
            self.persist(&snapshot);
        }
    }

    /// Mark every notification as read. Idempotent.
    pub fn mark_all_read(&self) {
        let snapshot = {
            let mut entries = self.entries.lock();
            let mut changed = false;
            for entry in entries.iter_mut().filter(|n| !n.read) {
                entry.read = true;
                changed = true;
            }
            changed.then(|| entries.clone())
        };
        if let Some(snapshot) = snapshot {
            self.persist(&snapshot);
        }
    }

    /// Remove one notification. Unknown ids are a no-op.
    pub fn remove(&self, id: &NotificationId) {
        let snapshot = {
            let mut entries = self.entries.lock();
            let before = entries.len();
            entries.retain(|n| n.id != *id);
            (entries.len() != before).then(|| entries.clone())
        };
        if let Some(snapshot) = snapshot {
            self.persist(&snapshot);
        }
    }

    /// Empty the collection.
    pub fn clear(&self) {
        let cleared = {
            let mut entries = self.entries.lock();
            if entries.is_empty() {
                false
            } else {
                entries.clear();
                true
            }
        };
        if cleared {
            self.persist(&[]);
        }
    }

    /// Merge externally fetched due-date alerts into the collection.
    ///
    /// The only entry point that creates [`Source::PmAlert`] entries.
    /// Alerts with an empty id, or whose alert id is already represented
    /// (in the collection or earlier in the same feed), are dropped, so
    /// repeated polls of an unchanged feed insert nothing. Survivors are
    /// prepended in fetched order, then the cap is enforced. Returns the
    /// number inserted; nothing is written when that number is zero.
    pub fn merge_pm_alerts(&self, alerts: &[PmAlert]) -> usize {
        let now = self.clock.now();
        let (inserted, snapshot) = {
            let mut entries = self.entries.lock();
            let mut seen: HashSet<String> = entries
                .iter()
                .filter(|n| n.source == Source::PmAlert)
                .filter_map(|n| n.alert_id.clone())
                .collect();

            let mut fresh = Vec::new();
            for alert in alerts {
                if alert.id.is_empty() || seen.contains(&alert.id) {
                    continue;
                }
                seen.insert(alert.id.clone());
                fresh.push(pm_notification(alert, now));
            }
            if fresh.is_empty() {
                return 0;
            }

            let inserted = fresh.len();
            fresh.extend(entries.drain(..));
            *entries = fresh;
            entries.truncate(MAX_NOTIFICATIONS);
            (inserted, entries.clone())
        };

        self.persist(&snapshot);
        debug!(inserted, "merged preventive-maintenance alerts");
        inserted
    }

    /// Current collection, newest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.entries.lock().clone()
    }

    /// Number of unread notifications. Derived, never stored.
    pub fn unread_count(&self) -> usize {
        self.entries.lock().iter().filter(|n| !n.read).count()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    fn persist(&self, entries: &[Notification]) {
        // Fire-and-forget: a failed write must not break the mutation.
        if let Err(e) = self.store.save(entries) {
            warn!(
                error = %e,
                path = %self.store.path().display(),
                "failed to persist notifications",
            );
        }
    }
}

/// Build the notification for a freshly surfaced PM alert.
fn pm_notification(alert: &PmAlert, now: DateTime<Utc>) -> Notification {
    Notification {
        id: NotificationId::pm(&alert.id),
        timestamp: alert.due_date.unwrap_or(now),
        read: false,
        title: format!("PM Due Soon: {}", alert.display_name()),
        message: pm_message(alert),
        priority: alert.priority.unwrap_or_default(),
        source: Source::PmAlert,
        alert_id: Some(alert.id.clone()),
        path: Some("/preventive-maintenance".to_string()),
    }
}

fn pm_message(alert: &PmAlert) -> String {
    let due = match alert.days_until {
        Some(0) => "Due today".to_string(),
        Some(1) => "Due in 1 day".to_string(),
        Some(days) => format!("Due in {} days", days),
        None => "Due soon".to_string(),
    };
    match alert.asset_id.as_deref() {
        Some(asset) => format!("{} (asset {})", due, asset),
        None => format!("{} (asset unassigned)", due),
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
