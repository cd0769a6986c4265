//! Citizen pressure: turns valid norms into petitions before the courts

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use super::case::Case;
use super::judicial::JudicialSystem;
use super::norm::Norm;
use super::political::PoliticalSystem;

/// Default number of cases per pressure round
pub const DEFAULT_DAILY_CASE_COUNT: usize = 5;

static CASE_TYPES: [&str; 5] = [
    "Environmental Concern",
    "Civil Rights Issue",
    "Labor Dispute",
    "Consumer Protection",
    "Public Safety Concern",
];

#[derive(Debug)]
pub struct CitizenPressure {
    daily_case_count: usize,
}

impl Default for CitizenPressure {
    fn default() -> Self {
        Self::new(DEFAULT_DAILY_CASE_COUNT)
    }
}

impl CitizenPressure {
    pub fn new(daily_case_count: usize) -> Self {
        Self { daily_case_count }
    }

    pub fn daily_case_count(&self) -> usize {
        self.daily_case_count
    }

    /// Open `daily_case_count` cases, each on a random valid norm
    ///
    /// Returns an empty list when no valid norm exists.
    pub fn generate_cases<R: Rng + ?Sized>(
        &self,
        parliament: &PoliticalSystem,
        judiciary: &mut JudicialSystem,
        rng: &mut R,
    ) -> Vec<Case> {
        let valid_norms: Vec<&Norm> = parliament.valid_norms().collect();
        if valid_norms.is_empty() {
            info!("No valid norm to generate case.");
            return Vec::new();
        }

        let mut generated = Vec::with_capacity(self.daily_case_count);
        for _ in 0..self.daily_case_count {
            let (Some(norm), Some(case_type)) = (valid_norms.choose(rng), CASE_TYPES.choose(rng)) else {
                break;
            };
            let text = format!("Citizen Petition: {} regarding {}", case_type, norm.text);
            if let Some(case) = judiciary.create_case_from_pressure(norm, text) {
                generated.push(case.clone());
            }
        }

        info!("Generated {} citizen pressure cases", generated.len());
        generated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_no_valid_norms_no_cases() {
        let mut parliament = PoliticalSystem::new();
        parliament.create_norm(None, 1, 0);
        parliament.get_mut(1).unwrap().invalidate();
        let mut judiciary = JudicialSystem::default();
        let mut rng = StdRng::seed_from_u64(1);

        let cases = CitizenPressure::default().generate_cases(&parliament, &mut judiciary, &mut rng);
        assert!(cases.is_empty());
        assert!(judiciary.cases().is_empty());
    }

    #[test]
    fn test_generates_daily_count_on_valid_norms() {
        let mut parliament = PoliticalSystem::new();
        parliament.create_norm(None, 1, 0);
        parliament.create_norm(None, 1, 0);
        parliament.get_mut(2).unwrap().invalidate();
        let mut judiciary = JudicialSystem::default();
        let mut rng = StdRng::seed_from_u64(7);

        let cases = CitizenPressure::new(4).generate_cases(&parliament, &mut judiciary, &mut rng);

        assert_eq!(cases.len(), 4);
        assert_eq!(judiciary.pending_cases().count(), 4);
        for case in &cases {
            assert_eq!(case.norm_id, 1);
            assert!(case.text.starts_with("Citizen Petition: "));
            assert!(case.text.ends_with("regarding Law 1"));
        }
    }
}
