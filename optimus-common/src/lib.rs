//! # OPTIMUS Common Library
//!
//! Shared code for the OPTIMUS society simulator:
//! - Error type
//! - Configuration loading and data folder resolution
//! - Broadcast event types and the EventBus
//! - Timestamp helpers

pub mod config;
pub mod error;
pub mod events;
pub mod time;

pub use error::{Error, Result};
pub use events::{EventBus, SocietyEvent};
