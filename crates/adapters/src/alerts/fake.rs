// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake alert source for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{AlertSource, AlertSourceError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use upkeep_core::PmAlert;

enum Scripted {
    Alerts(Vec<PmAlert>),
    Error(String),
}

struct FakeAlertState {
    response: Scripted,
    delay: Option<Duration>,
    fetches: usize,
}

/// Fake alert source for testing.
///
/// Returns the scripted response on every fetch. Responses can be
/// swapped between fetches, and an artificial delay lets tests park a
/// fetch in flight.
#[derive(Clone)]
pub struct FakeAlertSource {
    inner: Arc<Mutex<FakeAlertState>>,
}

impl Default for FakeAlertSource {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeAlertState {
                response: Scripted::Alerts(Vec::new()),
                delay: None,
                fetches: 0,
            })),
        }
    }
}

impl FakeAlertSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the feed returned by subsequent fetches.
    pub fn set_alerts(&self, alerts: Vec<PmAlert>) {
        self.inner.lock().response = Scripted::Alerts(alerts);
    }

    /// Script subsequent fetches to fail.
    pub fn set_error(&self, message: impl Into<String>) {
        self.inner.lock().response = Scripted::Error(message.into());
    }

    /// Delay every fetch by the given duration before responding.
    pub fn set_delay(&self, delay: Duration) {
        self.inner.lock().delay = Some(delay);
    }

    /// Number of fetches started (counted before any scripted delay).
    pub fn fetch_count(&self) -> usize {
        self.inner.lock().fetches
    }
}

#[async_trait]
impl AlertSource for FakeAlertSource {
    async fn fetch_due_alerts(&self) -> Result<Vec<PmAlert>, AlertSourceError> {
        let delay = {
            let mut state = self.inner.lock();
            state.fetches += 1;
            state.delay
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match &self.inner.lock().response {
            Scripted::Alerts(alerts) => Ok(alerts.clone()),
            Scripted::Error(message) => Err(AlertSourceError::Fetch(message.clone())),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
