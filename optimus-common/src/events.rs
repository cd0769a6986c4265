//! Broadcast event types and EventBus
//!
//! Events carry no payload. A client receiving one re-fetches the affected
//! state over REST instead of trusting any embedded data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tokio::sync::broadcast;
use tracing::debug;

use crate::Error;

/// Named signals pushed to real-time clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocietyEvent {
    /// A citizen case was resolved
    ///
    /// Clients refresh `/api/get_solved_cases`.
    CaseSolved,

    /// Parliament created a new norm
    NormCreated,

    /// A norm's validity changed
    NormUpdate,
}

impl SocietyEvent {
    /// All event kinds, in wire-name order
    pub const ALL: [SocietyEvent; 3] = [
        SocietyEvent::CaseSolved,
        SocietyEvent::NormCreated,
        SocietyEvent::NormUpdate,
    ];

    /// Wire name sent to clients
    pub fn name(&self) -> &'static str {
        match self {
            SocietyEvent::CaseSolved => "case_solved",
            SocietyEvent::NormCreated => "norm_created",
            SocietyEvent::NormUpdate => "norm_update",
        }
    }
}

impl fmt::Display for SocietyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SocietyEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SocietyEvent::ALL
            .into_iter()
            .find(|event| event.name() == s.trim())
            .ok_or_else(|| Error::InvalidInput(format!("Unknown event: {}", s)))
    }
}

// ========================================
// EventBus Implementation
// ========================================

/// Fan-out of [`SocietyEvent`]s to every connected real-time client
///
/// Uses tokio::broadcast internally:
/// - Publishing never blocks, even with slow or absent subscribers
/// - Each connected client holds one receiver; dropping it disconnects
/// - Events published before a client subscribes are never replayed
///
/// # Examples
///
/// ```
/// use optimus_common::events::{EventBus, SocietyEvent};
///
/// let bus = EventBus::new(100);
/// let mut rx = bus.subscribe();
///
/// bus.publish(SocietyEvent::CaseSolved);
/// assert_eq!(rx.try_recv().unwrap(), SocietyEvent::CaseSolved);
/// ```
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<SocietyEvent>,
    capacity: usize,
}

impl EventBus {
    /// Creates a new EventBus
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of signals buffered per slow client before it
    ///   starts skipping (recommended: 100)
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Subscribe to all future events
    pub fn subscribe(&self) -> broadcast::Receiver<SocietyEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to every connected client
    ///
    /// Returns the number of clients the event was queued for. Zero connected
    /// clients is not an error: the signal is simply dropped.
    pub fn publish(&self, event: SocietyEvent) -> usize {
        match self.tx.send(event) {
            Ok(count) => {
                debug!("Broadcast {} to {} clients", event, count);
                count
            }
            Err(_) => {
                debug!("No connected clients for {}", event);
                0
            }
        }
    }

    /// Get the current number of connected clients
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Get the configured channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(100)
    }
}
