//! Citizen case entity

use chrono::{DateTime, Utc};
use optimus_common::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Case lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Pending,
    Solved,
}

/// Judicial ruling on a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Accepted,
    Rejected,
}

impl FromStr for Decision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "accepted" | "accept" | "true" => Ok(Decision::Accepted),
            "rejected" | "reject" | "false" => Ok(Decision::Rejected),
            other => Err(Error::InvalidInput(format!(
                "Invalid decision '{}' (expected Accepted or Rejected)",
                other
            ))),
        }
    }
}

/// A case brought before the courts about one norm
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Case {
    pub id: u64,
    pub text: String,
    pub norm_id: u64,
    pub constitutional: bool,
    pub status: CaseStatus,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub decision: Option<Decision>,
    /// Simulated day the case was resolved on
    #[serde(skip)]
    pub resolved_day: Option<u64>,
}

impl Case {
    pub fn new(id: u64, text: String, norm_id: u64) -> Self {
        Self {
            id,
            text,
            norm_id,
            constitutional: true,
            status: CaseStatus::Pending,
            created_at: optimus_common::time::now(),
            resolved_at: None,
            decision: None,
            resolved_day: None,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.status == CaseStatus::Solved
    }

    /// Resolve the case; an accepted case is ruled constitutional
    pub fn resolve(&mut self, decision: Decision, day: u64) {
        self.constitutional = decision == Decision::Accepted;
        self.decision = Some(decision);
        self.status = CaseStatus::Solved;
        self.resolved_at = Some(optimus_common::time::now());
        self.resolved_day = Some(day);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_parse() {
        assert_eq!("Accepted".parse::<Decision>().unwrap(), Decision::Accepted);
        assert_eq!("rejected".parse::<Decision>().unwrap(), Decision::Rejected);
        assert!("maybe".parse::<Decision>().is_err());
    }

    #[test]
    fn test_resolve_rejected_case() {
        let mut case = Case::new(1, "Case 1".to_string(), 4);
        assert!(!case.is_solved());

        case.resolve(Decision::Rejected, 2);

        assert!(case.is_solved());
        assert!(!case.constitutional);
        assert_eq!(case.decision, Some(Decision::Rejected));
        assert_eq!(case.resolved_day, Some(2));
        assert!(case.resolved_at.is_some());
    }

    #[test]
    fn test_case_serialization() {
        let case = Case::new(3, "Case 3".to_string(), 1);
        let json = serde_json::to_value(&case).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["norm_id"], 1);
        assert!(json["resolved_at"].is_null());
        assert!(json.get("resolved_day").is_none());
    }
}
