//! Activity feed: human-readable log of actions taken this process lifetime
//!
//! Not persisted and never truncated.

#[derive(Debug, Clone, Default)]
pub struct ActivityFeed {
    entries: Vec<String>,
}

impl ActivityFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, description: impl Into<String>) {
        self.entries.push(description.into());
    }

    /// Entries in recording order
    pub fn all(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_order() {
        let mut feed = ActivityFeed::new();
        feed.record("Created Norm #1: Law 1");
        feed.record(String::from("Checked constitutionality for Norm #1: Valid"));

        assert_eq!(
            feed.all(),
            &[
                "Created Norm #1: Law 1".to_string(),
                "Checked constitutionality for Norm #1: Valid".to_string(),
            ]
        );
    }

    #[test]
    fn test_feed_is_unbounded() {
        let mut feed = ActivityFeed::new();
        assert!(feed.is_empty());
        for i in 0..10_000 {
            feed.record(format!("entry {}", i));
        }
        assert_eq!(feed.len(), 10_000);
        assert_eq!(feed.all()[0], "entry 0");
        assert_eq!(feed.all()[9_999], "entry 9999");
    }
}
