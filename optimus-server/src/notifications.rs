//! Notification log
//!
//! Append-only sequence of timestamped notifications. The in-memory sequence
//! grows for the whole process lifetime; the JSON file beside it only ever
//! holds the most recent [`PERSISTED_LIMIT`] entries and is rewritten after
//! each append. Disk failures are logged and never reach the caller.
//!
//! The file does not survive a restart: [`NotificationLog::open_fresh`]
//! deletes it before the first load.

use chrono::{DateTime, Utc};
use optimus_common::config::ensure_directory_exists;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// File name inside the data folder
pub const NOTIFICATIONS_FILE: &str = "notifications.json";

/// Entries kept in the persisted file
pub const PERSISTED_LIMIT: usize = 100;

/// Type given to notifications that do not name one
pub const DEFAULT_TYPE: &str = "info";

/// A single timestamped event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    /// UTC, serialized as ISO-8601
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: optimus_common::time::now(),
            kind: kind.into(),
        }
    }
}

/// Process-owned notification log with a capped on-disk copy
pub struct NotificationLog {
    path: PathBuf,
    notifications: RwLock<Vec<Notification>>,
}

impl NotificationLog {
    /// Log backed by `path`; touches nothing on disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            notifications: RwLock::new(Vec::new()),
        }
    }

    /// Startup sequence: create the data folder, discard the previous
    /// run's file, then load (which finds nothing)
    ///
    /// A file that could not be deleted is never loaded, so the log always
    /// starts empty.
    pub async fn open_fresh(data_dir: &Path) -> optimus_common::Result<Self> {
        ensure_directory_exists(data_dir)?;
        let log = Self::new(data_dir.join(NOTIFICATIONS_FILE));
        if log.clear_persisted().await {
            log.load_from_disk().await;
        } else {
            warn!("Skipping load of stale {}", log.path.display());
        }
        Ok(log)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the persisted file if present
    ///
    /// Returns `false` when a file may still be on disk.
    pub async fn clear_persisted(&self) -> bool {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                info!("Cleared old notifications file");
                true
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No old notifications file to clear");
                true
            }
            Err(e) => {
                error!("Failed to clear {}: {}", self.path.display(), e);
                false
            }
        }
    }

    /// Replace the in-memory sequence with the file contents
    ///
    /// A missing file or a malformed one both leave the log empty.
    pub async fn load_from_disk(&self) {
        let loaded = match tokio::fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice::<Vec<Notification>>(&bytes) {
                Ok(notifications) => {
                    info!("Loaded {} notifications", notifications.len());
                    notifications
                }
                Err(e) => {
                    warn!("Malformed notifications file {}: {}", self.path.display(), e);
                    Vec::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!("Failed to read {}: {}", self.path.display(), e);
                Vec::new()
            }
        };

        *self.notifications.write().await = loaded;
    }

    /// Append a notification of the given type and persist the tail
    pub async fn append(&self, message: impl Into<String>, kind: impl Into<String>) -> Notification {
        let notification = Notification::new(message, kind);

        // Held across the write so file rewrites land in append order
        let mut notifications = self.notifications.write().await;
        notifications.push(notification.clone());

        if let Err(e) = self.persist(&notifications).await {
            error!("Failed to save notifications: {}", e);
        }

        notification
    }

    /// Append with the default `info` type
    pub async fn info(&self, message: impl Into<String>) -> Notification {
        self.append(message, DEFAULT_TYPE).await
    }

    /// All notifications in insertion order, optionally of one type only
    pub async fn list(&self, kind: Option<&str>) -> Vec<Notification> {
        let notifications = self.notifications.read().await;
        match kind {
            Some(kind) => notifications
                .iter()
                .filter(|n| n.kind == kind)
                .cloned()
                .collect(),
            None => notifications.clone(),
        }
    }

    pub async fn len(&self) -> usize {
        self.notifications.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notifications.read().await.is_empty()
    }

    async fn persist(&self, notifications: &[Notification]) -> optimus_common::Result<()> {
        let start = notifications.len().saturating_sub(PERSISTED_LIMIT);
        let json = serde_json::to_vec(&notifications[start..])?;
        tokio::fs::write(&self.path, json).await?;
        debug!("Persisted {} notifications", notifications.len() - start);
        Ok(())
    }
}
