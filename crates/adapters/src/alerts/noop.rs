// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op alert source.

use super::{AlertSource, AlertSourceError};
use async_trait::async_trait;
use upkeep_core::PmAlert;

/// Alert source that always reports an empty feed.
///
/// Used when preventive-maintenance alerts are disabled or no provider
/// is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpAlertSource;

impl NoOpAlertSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AlertSource for NoOpAlertSource {
    async fn fetch_due_alerts(&self) -> Result<Vec<PmAlert>, AlertSourceError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
