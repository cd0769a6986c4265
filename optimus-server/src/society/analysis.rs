//! Aggregate statistics and the normative inflation model

use optimus_common::time::{hours_between, round_to};
use serde::Serialize;

use super::Society;

/// Counters over norms and cases
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Statistics {
    pub total_cases: usize,
    pub solved_cases: usize,
    pub pending_cases: usize,
    pub total_norms: usize,
    pub valid_norms: usize,
    pub invalid_norms: usize,
    /// Percentage of cases solved, one decimal
    pub resolution_rate: f64,
}

impl Statistics {
    pub fn compute(society: &Society) -> Self {
        let judiciary = &society.judicial_system;
        let parliament = &society.parliament;

        let total_cases = judiciary.cases().len();
        let solved_cases = judiciary.solved_cases().count();
        let resolution_rate = if total_cases == 0 {
            0.0
        } else {
            round_to(solved_cases as f64 / total_cases as f64 * 100.0, 1)
        };

        Self {
            total_cases,
            solved_cases,
            pending_cases: judiciary.pending_cases().count(),
            total_norms: parliament.norms().len(),
            valid_norms: parliament.valid_norms().count(),
            invalid_norms: parliament.invalid_norms().count(),
            resolution_rate,
        }
    }
}

/// Norm production against judicial throughput, per simulated day
#[derive(Debug, Clone, PartialEq)]
pub struct NormativeInflation {
    /// Valid norms created on the latest active day
    pub normative_density: usize,
    /// Cases solved on the latest active day
    pub processing_rate: usize,
    /// Norms left unprocessed on that day
    pub backlog: usize,
    /// Mean hours between case creation and resolution
    pub temporal_gap: f64,
}

/// Wire form of [`NormativeInflation`]
#[derive(Debug, Serialize)]
pub struct NormativeInflationResponse {
    pub normative_density: usize,
    pub processing_rate: usize,
    pub backlog: usize,
    pub temporal_gap: String,
}

impl NormativeInflation {
    pub fn compute(society: &Society) -> Self {
        let norm_days: Vec<u64> = society
            .parliament
            .valid_norms()
            .map(|n| n.created_day)
            .collect();
        let solved_days: Vec<u64> = society
            .judicial_system
            .solved_cases()
            .filter_map(|c| c.resolved_day)
            .collect();

        let latest_day = norm_days.iter().chain(solved_days.iter()).max().copied();
        let (normative_density, processing_rate) = match latest_day {
            Some(day) => (
                norm_days.iter().filter(|d| **d == day).count(),
                solved_days.iter().filter(|d| **d == day).count(),
            ),
            None => (0, 0),
        };

        let gaps: Vec<f64> = society
            .judicial_system
            .solved_cases()
            .filter_map(|c| c.resolved_at.map(|resolved| hours_between(c.created_at, resolved)))
            .collect();
        let temporal_gap = if gaps.is_empty() {
            0.0
        } else {
            round_to(gaps.iter().sum::<f64>() / gaps.len() as f64, 2)
        };

        Self {
            normative_density,
            processing_rate,
            backlog: normative_density.saturating_sub(processing_rate),
            temporal_gap,
        }
    }

    pub fn to_response(&self) -> NormativeInflationResponse {
        NormativeInflationResponse {
            normative_density: self.normative_density,
            processing_rate: self.processing_rate,
            backlog: self.backlog,
            temporal_gap: format!("{} hours", self.temporal_gap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::society::{Decision, SocietySettings};

    fn society() -> Society {
        Society::with_seed(SocietySettings::default(), 11)
    }

    #[test]
    fn test_statistics_empty_society() {
        let stats = Statistics::compute(&society());
        assert_eq!(stats.total_cases, 0);
        assert_eq!(stats.total_norms, 0);
        assert_eq!(stats.resolution_rate, 0.0);
    }

    #[test]
    fn test_statistics_counts_and_rate() {
        let mut society = society();
        society.create_norm(None);
        society.create_norm(None);
        society.mark_unconstitutional(2).unwrap();
        let cases = society.generate_citizen_cases();
        assert_eq!(cases.len(), 5);
        society.solve_case(cases[0].id, Decision::Accepted).unwrap();

        let stats = Statistics::compute(&society);
        assert_eq!(stats.total_norms, 2);
        assert_eq!(stats.valid_norms, 1);
        assert_eq!(stats.invalid_norms, 1);
        assert_eq!(stats.total_cases, 5);
        assert_eq!(stats.solved_cases, 1);
        assert_eq!(stats.pending_cases, 4);
        assert_eq!(stats.resolution_rate, 20.0);
    }

    #[test]
    fn test_inflation_uses_latest_day() {
        let mut society = society();
        society.create_norm(None);
        society.advance_day();
        society.create_norm(None);
        society.create_norm(None);
        let cases = society.generate_citizen_cases();
        society.solve_case(cases[0].id, Decision::Rejected).unwrap();

        let model = NormativeInflation::compute(&society);
        assert_eq!(model.normative_density, 2);
        assert_eq!(model.processing_rate, 1);
        assert_eq!(model.backlog, 1);
        assert!(model.temporal_gap >= 0.0);
        assert!(model.to_response().temporal_gap.ends_with(" hours"));
    }

    #[test]
    fn test_inflation_empty_society() {
        let model = NormativeInflation::compute(&society());
        assert_eq!(model.normative_density, 0);
        assert_eq!(model.backlog, 0);
        assert_eq!(model.to_response().temporal_gap, "0 hours");
    }
}
