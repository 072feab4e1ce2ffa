// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decoding for raw alert feeds.

use super::AlertSourceError;
use tracing::warn;
use upkeep_core::PmAlert;

/// Decode a raw provider payload into alert records.
///
/// The payload must be a JSON array; anything else is malformed and the
/// whole feed is rejected. Elements that fail to decode are skipped so
/// one bad record cannot suppress the rest of the feed.
pub fn parse_alert_feed(payload: serde_json::Value) -> Result<Vec<PmAlert>, AlertSourceError> {
    let items = match payload {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(AlertSourceError::Malformed(format!(
                "expected an array of alerts, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut alerts = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<PmAlert>(item) {
            Ok(alert) => alerts.push(alert),
            Err(e) => warn!(error = %e, "skipping undecodable alert record"),
        }
    }
    Ok(alerts)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "feed_tests.rs"]
mod tests;
