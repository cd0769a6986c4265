//! Legal norm entity

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A legal rule produced by Parliament
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Norm {
    pub id: u64,
    pub text: String,
    /// false once the norm has been found unconstitutional
    pub valid: bool,
    /// 1..=10
    pub complexity: u8,
    /// true once the judiciary has checked the norm
    pub constitutional: bool,
    /// Simulated day the norm was created on
    #[serde(skip)]
    pub created_day: u64,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

impl Norm {
    pub fn new(id: u64, text: String, complexity: u8, day: u64) -> Self {
        Self {
            id,
            text,
            valid: true,
            complexity,
            constitutional: false,
            created_day: day,
            created_at: optimus_common::time::now(),
        }
    }

    /// Mark the norm as invalid (unconstitutional)
    pub fn invalidate(&mut self) {
        self.valid = false;
    }
}
