//! Society domain model
//!
//! Parliament enacts norms, the judiciary reviews them and resolves citizen
//! cases, and citizen pressure turns valid norms into new cases. The day
//! counter (`iteration`) belongs here; day completion tracking lives in
//! [`crate::progress`].

pub mod analysis;
pub mod case;
pub mod citizen_pressure;
pub mod judicial;
pub mod norm;
pub mod political;

pub use analysis::{NormativeInflation, Statistics};
pub use case::{Case, CaseStatus, Decision};
pub use citizen_pressure::{CitizenPressure, DEFAULT_DAILY_CASE_COUNT};
pub use judicial::{JudicialSystem, DEFAULT_MAX_CONSTITUTIONAL_COMPLEXITY};
pub use norm::Norm;
pub use political::PoliticalSystem;

use optimus_common::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Tunables for the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocietySettings {
    pub max_constitutional_complexity: u8,
    pub daily_case_count: usize,
}

impl Default for SocietySettings {
    fn default() -> Self {
        Self {
            max_constitutional_complexity: DEFAULT_MAX_CONSTITUTIONAL_COMPLEXITY,
            daily_case_count: DEFAULT_DAILY_CASE_COUNT,
        }
    }
}

/// The simulated society
#[derive(Debug)]
pub struct Society {
    pub parliament: PoliticalSystem,
    pub judicial_system: JudicialSystem,
    pub citizen_pressure: CitizenPressure,
    /// Number of completed days
    pub iteration: u64,
    rng: StdRng,
}

impl Society {
    pub fn new(settings: SocietySettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Deterministic society for tests and reproducible runs
    pub fn with_seed(settings: SocietySettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: SocietySettings, rng: StdRng) -> Self {
        info!(
            "Systems initialized: Parliament, Judicial System (max complexity {}), Citizen Pressure ({} cases/day)",
            settings.max_constitutional_complexity, settings.daily_case_count
        );
        Self {
            parliament: PoliticalSystem::new(),
            judicial_system: JudicialSystem::new(settings.max_constitutional_complexity),
            citizen_pressure: CitizenPressure::new(settings.daily_case_count),
            iteration: 0,
            rng,
        }
    }

    /// Parliament enacts a norm with complexity drawn from 1..=10
    pub fn create_norm(&mut self, text: Option<String>) -> Norm {
        let complexity = self.rng.gen_range(1..=10);
        self.parliament
            .create_norm(text, complexity, self.iteration)
            .clone()
    }

    /// Judicial review of an existing norm, mutating it in place
    pub fn check_constitutionality(&mut self, norm_id: u64) -> Result<Norm> {
        let norm = self
            .parliament
            .get_mut(norm_id)
            .ok_or_else(|| Error::NotFound("Norm not found".to_string()))?;
        self.judicial_system.check_constitutionality(norm);
        Ok(norm.clone())
    }

    /// Strike a norm down without review
    pub fn mark_unconstitutional(&mut self, norm_id: u64) -> Result<Norm> {
        let norm = self
            .parliament
            .get_mut(norm_id)
            .ok_or_else(|| Error::NotFound("Norm not found".to_string()))?;
        norm.invalidate();
        info!("Norm {}: Invalidated", norm.id);
        Ok(norm.clone())
    }

    /// One round of citizen pressure
    pub fn generate_citizen_cases(&mut self) -> Vec<Case> {
        self.citizen_pressure
            .generate_cases(&self.parliament, &mut self.judicial_system, &mut self.rng)
    }

    pub fn solve_case(&mut self, case_id: u64, decision: Decision) -> Result<Case> {
        self.judicial_system
            .solve_case(case_id, decision, self.iteration)
            .cloned()
    }

    /// Move to the next day, returning its number
    pub fn advance_day(&mut self) -> u64 {
        self.iteration += 1;
        info!("Advanced to day {}", self.iteration);
        self.iteration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn society() -> Society {
        Society::with_seed(SocietySettings::default(), 42)
    }

    #[test]
    fn test_create_norm_complexity_in_range() {
        let mut society = society();
        for _ in 0..50 {
            let norm = society.create_norm(None);
            assert!((1..=10).contains(&norm.complexity));
        }
        assert_eq!(society.parliament.norms().len(), 50);
    }

    #[test]
    fn test_check_unknown_norm_is_not_found() {
        let mut society = society();
        assert!(matches!(
            society.check_constitutionality(99),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_check_mutates_stored_norm() {
        let mut society = Society::with_seed(
            SocietySettings {
                max_constitutional_complexity: 0,
                ..Default::default()
            },
            1,
        );
        let id = society.create_norm(None).id;

        let checked = society.check_constitutionality(id).unwrap();
        assert!(!checked.valid);
        assert_eq!(society.parliament.get(id), Some(&checked));
    }

    #[test]
    fn test_mark_unconstitutional() {
        let mut society = society();
        let id = society.create_norm(Some("Curfew".to_string())).id;
        let norm = society.mark_unconstitutional(id).unwrap();
        assert!(!norm.valid);
        assert!(society.mark_unconstitutional(id + 1).is_err());
    }

    #[test]
    fn test_solve_case_records_current_day() {
        let mut society = society();
        society.create_norm(None);
        let cases = society.generate_citizen_cases();
        society.advance_day();
        society.advance_day();

        let solved = society.solve_case(cases[0].id, Decision::Accepted).unwrap();
        assert_eq!(solved.resolved_day, Some(2));
        assert_eq!(society.iteration, 2);
    }

    #[test]
    fn test_seeded_societies_are_reproducible() {
        let mut a = society();
        let mut b = society();
        let ca: Vec<u8> = (0..10).map(|_| a.create_norm(None).complexity).collect();
        let cb: Vec<u8> = (0..10).map(|_| b.create_norm(None).complexity).collect();
        assert_eq!(ca, cb);
    }
}
