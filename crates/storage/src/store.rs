// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable persistence for the notification collection.
//!
//! One fixed slot (a JSON file) holds the serialized collection as an
//! ordered array of notification records. Loads reconstruct the exact
//! field set, including read flags, so unread counts computed after a
//! restart match the pre-restart state.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;
use upkeep_core::Notification;

/// Errors that can occur in store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed store for a single notification collection.
#[derive(Debug, Clone)]
pub struct NotificationStore {
    path: PathBuf,
}

impl NotificationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted collection.
    ///
    /// A missing slot is an empty collection, not an error. An
    /// undecodable or incompatible slot is moved aside to `.bak` and
    /// also treated as empty, so a bad write can never wedge startup.
    pub fn load(&self) -> Result<Vec<Notification>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(items) => Ok(items),
            Err(e) => {
                let bak = self.path.with_extension("bak");
                warn!(
                    error = %e,
                    path = %self.path.display(),
                    bak = %bak.display(),
                    "undecodable notification slot, moving to .bak and starting empty",
                );
                fs::rename(&self.path, &bak)?;
                Ok(Vec::new())
            }
        }
    }

    /// Save the collection atomically (write to .tmp, then rename).
    ///
    /// A crash during save leaves the previous slot contents intact.
    pub fn save(&self, items: &[Notification]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("tmp");

        // Write to temp file and sync
        {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer(&mut writer, items)?;
            let file = writer.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()?;
        }

        // Atomic rename
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

/// Default slot location under the per-user data directory.
///
/// `None` when the platform exposes no data directory.
pub fn default_slot_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("upkeep").join("notifications.json"))
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
