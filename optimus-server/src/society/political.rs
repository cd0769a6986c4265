//! Parliament: creates norms

use tracing::info;

use super::norm::Norm;

/// The political body
#[derive(Debug, Default)]
pub struct PoliticalSystem {
    norm_counter: u64,
    norms: Vec<Norm>,
}

impl PoliticalSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enact a new norm
    ///
    /// Ids are sequential from 1. Without an explicit text the norm is
    /// named `Law {id}`.
    pub fn create_norm(&mut self, text: Option<String>, complexity: u8, day: u64) -> &Norm {
        self.norm_counter += 1;
        let id = self.norm_counter;
        let text = text
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| format!("Law {}", id));

        let norm = Norm::new(id, text, complexity, day);
        info!(
            "Created Norm #{} - {} (Valid: {}, Complexity: {})",
            norm.id, norm.text, norm.valid, norm.complexity
        );
        self.norms.push(norm);
        &self.norms[self.norms.len() - 1]
    }

    pub fn get(&self, id: u64) -> Option<&Norm> {
        self.norms.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Norm> {
        self.norms.iter_mut().find(|n| n.id == id)
    }

    /// All norms in creation order
    pub fn norms(&self) -> &[Norm] {
        &self.norms
    }

    pub fn valid_norms(&self) -> impl Iterator<Item = &Norm> {
        self.norms.iter().filter(|n| n.valid)
    }

    pub fn invalid_norms(&self) -> impl Iterator<Item = &Norm> {
        self.norms.iter().filter(|n| !n.valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_ids_are_sequential() {
        let mut parliament = PoliticalSystem::new();
        assert_eq!(parliament.create_norm(None, 3, 0).id, 1);
        assert_eq!(parliament.create_norm(None, 4, 0).id, 2);
        assert_eq!(parliament.norms().len(), 2);
    }

    #[test]
    fn test_default_and_explicit_text() {
        let mut parliament = PoliticalSystem::new();
        assert_eq!(parliament.create_norm(None, 1, 0).text, "Law 1");
        assert_eq!(parliament.create_norm(Some("  ".to_string()), 1, 0).text, "Law 2");
        assert_eq!(
            parliament.create_norm(Some("Speed limit".to_string()), 1, 0).text,
            "Speed limit"
        );
    }

    #[test]
    fn test_new_norm_is_valid_and_unchecked() {
        let mut parliament = PoliticalSystem::new();
        let norm = parliament.create_norm(None, 9, 4);
        assert!(norm.valid);
        assert!(!norm.constitutional);
        assert_eq!(norm.created_day, 4);
    }

    #[test]
    fn test_valid_and_invalid_partition() {
        let mut parliament = PoliticalSystem::new();
        parliament.create_norm(None, 1, 0);
        parliament.create_norm(None, 2, 0);
        parliament.get_mut(2).unwrap().invalidate();

        let valid: Vec<u64> = parliament.valid_norms().map(|n| n.id).collect();
        let invalid: Vec<u64> = parliament.invalid_norms().map(|n| n.id).collect();
        assert_eq!(valid, vec![1]);
        assert_eq!(invalid, vec![2]);
        assert!(parliament.get(3).is_none());
    }
}
