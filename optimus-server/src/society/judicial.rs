//! Judicial system: constitutionality review and case resolution

use optimus_common::{Error, Result};
use tracing::info;

use super::case::{Case, Decision};
use super::norm::Norm;

/// Default highest complexity a norm may carry and still be constitutional
pub const DEFAULT_MAX_CONSTITUTIONAL_COMPLEXITY: u8 = 7;

/// The judicial body
#[derive(Debug)]
pub struct JudicialSystem {
    case_counter: u64,
    cases: Vec<Case>,
    max_constitutional_complexity: u8,
}

impl Default for JudicialSystem {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONSTITUTIONAL_COMPLEXITY)
    }
}

impl JudicialSystem {
    pub fn new(max_constitutional_complexity: u8) -> Self {
        Self {
            case_counter: 0,
            cases: Vec::new(),
            max_constitutional_complexity,
        }
    }

    /// Review a norm in place
    ///
    /// The norm is marked as checked. A norm more complex than the
    /// configured ceiling is struck down; a norm already invalid stays
    /// invalid.
    pub fn check_constitutionality(&self, norm: &mut Norm) {
        info!(
            "Checking constitutionality of norm {} with complexity {}",
            norm.id, norm.complexity
        );
        norm.constitutional = true;
        if norm.complexity > self.max_constitutional_complexity {
            norm.invalidate();
        }
    }

    /// Open a case against a valid norm; invalid norms yield no case
    pub fn create_case_from_pressure(&mut self, norm: &Norm, pressure_text: String) -> Option<&Case> {
        if !norm.valid {
            return None;
        }
        self.case_counter += 1;
        let case = Case::new(self.case_counter, pressure_text, norm.id);
        info!("Created Pressure Case #{} for Norm #{}", case.id, norm.id);
        self.cases.push(case);
        self.cases.last()
    }

    /// Resolve a pending case
    pub fn solve_case(&mut self, case_id: u64, decision: Decision, day: u64) -> Result<&Case> {
        let case = self
            .cases
            .iter_mut()
            .find(|c| c.id == case_id)
            .ok_or_else(|| Error::NotFound("Case not found".to_string()))?;

        if case.is_solved() {
            return Err(Error::InvalidInput(format!("Case {} is already solved", case_id)));
        }

        case.resolve(decision, day);
        info!("Case {} resolved with decision {:?}", case.id, decision);
        Ok(case)
    }

    /// All cases in creation order
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn pending_cases(&self) -> impl Iterator<Item = &Case> {
        self.cases.iter().filter(|c| !c.is_solved())
    }

    pub fn solved_cases(&self) -> impl Iterator<Item = &Case> {
        self.cases.iter().filter(|c| c.is_solved())
    }
}
