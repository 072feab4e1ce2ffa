// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification records held by the registry.
//!
//! A notification is one displayable alert or event. Manually triggered
//! entries come from interactive surfaces; `pm-alert` entries are merged
//! in by the background poller and carry the provider's alert id so
//! repeated polls can be deduplicated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub String);

impl NotificationId {
    /// Create a new NotificationId from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string value of this NotificationId.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Deterministic id for a poller-merged preventive-maintenance alert.
    ///
    /// Derived from the provider's alert id; unique as long as the
    /// dedup invariant holds (at most one entry per alert id).
    pub fn pm(alert_id: &str) -> Self {
        Self(format!("pm-{}", alert_id))
    }

    /// Returns true if this id was derived from a preventive-maintenance alert.
    pub fn is_pm(&self) -> bool {
        self.0.starts_with("pm-")
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NotificationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NotificationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for NotificationId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NotificationId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Borrow<str> for NotificationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Display priority of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl serde::Serialize for Priority {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Priority {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "low" => Priority::Low,
            "high" => Priority::High,
            // "medium" + anything unrecognized maps to Medium
            _ => Priority::Medium,
        })
    }
}

/// Origin of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    /// Triggered by an interactive action
    #[default]
    Manual,
    /// Merged from the Alerts Provider by the poller
    PmAlert,
}

impl serde::Serialize for Source {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Source::Manual => serializer.serialize_str("manual"),
            Source::PmAlert => serializer.serialize_str("pm-alert"),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Source {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "pm-alert" => Ok(Source::PmAlert),
            // "manual" + anything unrecognized maps to Manual
            _ => Ok(Source::Manual),
        }
    }
}

/// One displayable alert or event record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    /// When the notification was created, or the event it represents occurred
    pub timestamp: DateTime<Utc>,
    /// Monotonic: flips false -> true, never back
    pub read: bool,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub source: Source,
    /// The provider's alert id; present only for `pm-alert` entries
    #[serde(default, rename = "alertId", skip_serializing_if = "Option::is_none")]
    pub alert_id: Option<String>,
    /// Navigation target associated with the notification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Payload for a manually added notification.
///
/// The registry assigns the id, timestamp, read flag, and source.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub priority: Priority,
    pub path: Option<String>,
}

impl NewNotification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            priority: Priority::Medium,
            path: None,
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// A low-priority confirmation, e.g. after a successful action.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message).priority(Priority::Low)
    }

    /// A medium-priority warning.
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message)
    }

    /// A high-priority error.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message).priority(Priority::High)
    }

    /// Notification about a work order; navigates to the work-orders list.
    pub fn work_order(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message).path("/work-orders")
    }

    /// Notification about an asset; navigates to the assets list.
    pub fn asset(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message).path("/assets")
    }

    /// Notification about a PM schedule; navigates to preventive maintenance.
    pub fn preventive_maintenance(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message).path("/preventive-maintenance")
    }

    /// Notification about stock levels; navigates to the inventory list.
    pub fn inventory(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message).path("/inventory")
    }
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
