// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Background poller that merges provider alerts into the registry.
//!
//! One merge runs immediately at startup, then one per interval. A tick
//! whose fetch fails is skipped and the next tick retries. Polls never
//! overlap: the loop does not start a fetch before the previous merge
//! completed. Teardown stops the schedule, and an in-flight fetch whose
//! result arrives after teardown is discarded unapplied.

use crate::registry::NotificationRegistry;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, warn};
use upkeep_adapters::AlertSource;
use upkeep_core::{Clock, IdGen};

/// Start polling the Alerts Provider.
///
/// Spawns a background task and returns its shutdown sender. Firing or
/// dropping the sender tears the poller down.
pub fn start_poller<A, I, C>(
    registry: NotificationRegistry<I, C>,
    source: A,
    interval: Duration,
) -> oneshot::Sender<()>
where
    A: AlertSource,
    I: IdGen,
    C: Clock,
{
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    tokio::spawn(poll_loop(registry, source, interval, shutdown_rx));
    shutdown_tx
}

async fn poll_loop<A, I, C>(
    registry: NotificationRegistry<I, C>,
    source: A,
    interval: Duration,
    mut shutdown_rx: oneshot::Receiver<()>,
) where
    A: AlertSource,
    I: IdGen,
    C: Clock,
{
    loop {
        tokio::select! {
            result = source.fetch_due_alerts() => match result {
                Ok(alerts) => {
                    let inserted = registry.merge_pm_alerts(&alerts);
                    if inserted > 0 {
                        debug!(inserted, total = registry.len(), "alert poll surfaced new notifications");
                    }
                }
                Err(e) => {
                    warn!(error = %e, "alert fetch failed, skipping tick");
                }
            },
            _ = &mut shutdown_rx => {
                debug!("alert poller shutdown requested, discarding in-flight fetch");
                return;
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = &mut shutdown_rx => {
                debug!("alert poller shutdown requested");
                return;
            }
        }
    }
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
