//! Day progress tracking
//!
//! A day is complete once every [`DayAction`] has happened at least once.
//! The tracker holds no day counter: callers pass the society's iteration
//! when checking, and whoever advances the day calls [`DayProgressTracker::reset_day`].
//! Without that reset the day cannot progress twice.

use optimus_common::Error;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// The closed set of actions a day requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayAction {
    Political,
    Judicial,
}

impl DayAction {
    pub const ALL: [DayAction; 2] = [DayAction::Political, DayAction::Judicial];

    pub fn name(&self) -> &'static str {
        match self {
            DayAction::Political => "political",
            DayAction::Judicial => "judicial",
        }
    }
}

impl fmt::Display for DayAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayAction::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown day action: {}", s)))
    }
}

/// Completion flags for the current day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayProgressTracker {
    #[serde(flatten)]
    completed: BTreeMap<DayAction, bool>,
}

impl Default for DayProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DayProgressTracker {
    pub fn new() -> Self {
        Self {
            completed: DayAction::ALL.into_iter().map(|a| (a, false)).collect(),
        }
    }

    /// Record that `action` happened today (idempotent)
    pub fn mark_complete(&mut self, action: DayAction) {
        self.completed.insert(action, true);
    }

    pub fn is_complete(&self, action: DayAction) -> bool {
        self.completed.get(&action).copied().unwrap_or(false)
    }

    pub fn is_day_complete(&self) -> bool {
        self.completed.values().all(|done| *done)
    }

    /// Log readiness for the next day when every action is done
    ///
    /// `iteration` is the society's current day counter.
    pub fn check_day_progress(&self, iteration: u64) -> bool {
        let complete = self.is_day_complete();
        if complete {
            info!(
                "Both actions completed. Ready for next day (Day {}).",
                iteration + 1
            );
        }
        complete
    }

    /// Clear every flag for a new day
    pub fn reset_day(&mut self) {
        for done in self.completed.values_mut() {
            *done = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_is_incomplete() {
        let tracker = DayProgressTracker::new();
        assert!(!tracker.is_day_complete());
        assert!(!tracker.check_day_progress(0));
    }

    #[test]
    fn test_single_action_does_not_complete_day() {
        let mut tracker = DayProgressTracker::new();
        tracker.mark_complete(DayAction::Political);
        assert!(tracker.is_complete(DayAction::Political));
        assert!(!tracker.is_day_complete());
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut a = DayProgressTracker::new();
        a.mark_complete(DayAction::Political);
        a.mark_complete(DayAction::Judicial);

        let mut b = DayProgressTracker::new();
        b.mark_complete(DayAction::Judicial);
        b.mark_complete(DayAction::Political);

        assert!(a.is_day_complete());
        assert!(b.is_day_complete());
        assert_eq!(a, b);
    }

    #[test]
    fn test_marking_twice_is_idempotent() {
        let mut tracker = DayProgressTracker::new();
        tracker.mark_complete(DayAction::Judicial);
        tracker.mark_complete(DayAction::Judicial);
        assert!(!tracker.is_day_complete());

        tracker.mark_complete(DayAction::Political);
        tracker.mark_complete(DayAction::Political);
        assert!(tracker.check_day_progress(3));
    }

    #[test]
    fn test_reset_day_clears_flags() {
        let mut tracker = DayProgressTracker::new();
        tracker.mark_complete(DayAction::Political);
        tracker.mark_complete(DayAction::Judicial);
        tracker.reset_day();

        assert!(!tracker.is_day_complete());
        assert_eq!(tracker, DayProgressTracker::new());
    }

    #[test]
    fn test_action_names() {
        assert_eq!("political".parse::<DayAction>().unwrap(), DayAction::Political);
        assert_eq!("judicial".parse::<DayAction>().unwrap(), DayAction::Judicial);
        assert!("economic".parse::<DayAction>().is_err());
    }

    #[test]
    fn test_serializes_as_flag_map() {
        let mut tracker = DayProgressTracker::new();
        tracker.mark_complete(DayAction::Judicial);
        let json = serde_json::to_value(&tracker).unwrap();
        assert_eq!(json["political"], false);
        assert_eq!(json["judicial"], true);
    }
}
