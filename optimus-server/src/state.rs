//! Shared simulation state
//!
//! One instance is built at startup and shared by every handler. Each
//! component sits behind its own lock; a handler holds a lock only for the
//! duration of its own mutation, so a request's domain change, activity
//! record and progress mark are not applied atomically.

use tokio::sync::RwLock;

use crate::activity::ActivityFeed;
use crate::progress::{DayAction, DayProgressTracker};
use crate::society::Society;

pub struct SharedState {
    pub society: RwLock<Society>,
    pub progress: RwLock<DayProgressTracker>,
    pub activities: RwLock<ActivityFeed>,
}

impl SharedState {
    pub fn new(society: Society) -> Self {
        Self {
            society: RwLock::new(society),
            progress: RwLock::new(DayProgressTracker::new()),
            activities: RwLock::new(ActivityFeed::new()),
        }
    }

    /// Append to the activity feed
    pub async fn record_activity(&self, description: impl Into<String>) {
        self.activities.write().await.record(description);
    }

    /// Snapshot of the activity feed
    pub async fn activities(&self) -> Vec<String> {
        self.activities.read().await.all().to_vec()
    }

    /// Mark `action` done for today and report whether the day is complete
    ///
    /// `iteration` is the society's day counter observed by the caller.
    pub async fn mark_action(&self, action: DayAction, iteration: u64) -> bool {
        let mut progress = self.progress.write().await;
        progress.mark_complete(action);
        progress.check_day_progress(iteration)
    }

    /// Current progress flags
    pub async fn progress(&self) -> DayProgressTracker {
        self.progress.read().await.clone()
    }
}
