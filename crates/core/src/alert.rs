// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Externally sourced preventive-maintenance alerts, pre-merge.
//!
//! The Alerts Provider decides *when* a PM schedule is due soon; this
//! module only models what it returns. Decoding is lenient: optional
//! fields that fail to parse degrade to `None` instead of rejecting the
//! record.

use crate::notification::Priority;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One due-date alert as returned by the Alerts Provider.
///
/// Serde names follow the provider's wire format.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PmAlert {
    /// Provider identifier; empty when the provider omitted it
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "pmNumber", skip_serializing_if = "Option::is_none")]
    pub pm_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "assetId", skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(
        default,
        rename = "nextDue",
        deserialize_with = "lenient_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        rename = "daysUntil",
        deserialize_with = "lenient_days",
        skip_serializing_if = "Option::is_none"
    )]
    pub days_until: Option<i64>,
}

impl PmAlert {
    /// Human-facing name: the PM's name, else its number, else the raw id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.pm_number.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Parse a provider timestamp.
///
/// Tries RFC 3339 first, then the offset-less ISO form the provider
/// emits for `nextDue` (interpreted as UTC).
pub fn parse_provider_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(parse_provider_datetime))
}

fn lenient_days<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

#[cfg(test)]
#[path = "alert_tests.rs"]
mod tests;
