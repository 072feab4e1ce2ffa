// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alerts Provider adapters

mod feed;
mod noop;

pub use feed::parse_alert_feed;
pub use noop::NoOpAlertSource;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeAlertSource;

use async_trait::async_trait;
use thiserror::Error;
use upkeep_core::PmAlert;

/// Errors from the Alerts Provider boundary
#[derive(Debug, Error)]
pub enum AlertSourceError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("malformed alert feed: {0}")]
    Malformed(String),
}

/// Adapter for fetching due-date alerts from the Alerts Provider.
///
/// The provider computes which PM schedules are due soon; implementations
/// wrap whatever transport the deployment uses and hand back decoded
/// records. Both error variants are recovered identically by the poller:
/// the tick is skipped and the next one retries.
#[async_trait]
pub trait AlertSource: Clone + Send + Sync + 'static {
    /// Fetch the alerts currently due according to the provider.
    async fn fetch_due_alerts(&self) -> Result<Vec<PmAlert>, AlertSourceError>;
}
