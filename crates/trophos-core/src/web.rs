//! # Food Web Engine
//!
//! The mutation engine for the Trophos food web.
//!
//! The web is a dense vector of species addressed by position. The three
//! mutations preserve one contract between them:
//! - insertion always appends, so no existing index ever moves;
//! - relation insertion validates bounds, self-loops, and duplicates
//!   before touching anything;
//! - removal compacts the vector and renumbers every surviving prey index
//!   in the same call, so a stale index is never observable.

use crate::{Species, SpeciesIndex, TrophosError};

// =============================================================================
// NAME VALIDATION
// =============================================================================

/// Longest accepted species name, in bytes.
///
/// Names are read as single whitespace-delimited tokens and printed in
/// fixed-width listings; longer tokens are rejected, not truncated.
pub const MAX_NAME_LENGTH: usize = 19;

/// Validate a species name before insertion.
///
/// `FoodWeb::insert_species` takes names as given; callers accepting
/// untrusted input run this first and report the reason on rejection.
pub fn validate_name(name: &str) -> Result<(), TrophosError> {
    if name.is_empty() {
        return Err(TrophosError::InvalidName("name is empty".to_string()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(TrophosError::InvalidName(format!(
            "name exceeds {} bytes",
            MAX_NAME_LENGTH
        )));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(TrophosError::InvalidName(
            "name contains whitespace".to_string(),
        ));
    }
    Ok(())
}

// =============================================================================
// FOOD WEB
// =============================================================================

/// The food web: a dense species vector plus the prey sequences stored
/// inside each species.
///
/// Invariant after every public operation: every stored prey index is in
/// bounds, no species preys on itself, and no predator lists the same prey
/// twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodWeb {
    species: Vec<Species>,
}

impl FoodWeb {
    /// Create a new empty food web.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a species with an empty prey sequence.
    ///
    /// Always appends: the returned index equals the web's length before
    /// the call, and no existing index moves. Infallible; run
    /// [`validate_name`] first when the name comes from user input.
    pub fn insert_species(&mut self, name: impl Into<String>) -> SpeciesIndex {
        let index = SpeciesIndex(self.species.len());
        self.species.push(Species::new(name));
        index
    }

    /// Record that `predator` eats `prey`.
    ///
    /// Validation order: predator bounds, prey bounds, self-loop,
    /// duplicate. The first violation rejects the call and the web is left
    /// unchanged. On success the prey index is appended to the predator's
    /// sequence, preserving insertion order.
    pub fn add_relation(
        &mut self,
        predator: SpeciesIndex,
        prey: SpeciesIndex,
    ) -> Result<(), TrophosError> {
        if predator.0 >= self.species.len() {
            return Err(TrophosError::InvalidIndex(predator));
        }
        if prey.0 >= self.species.len() {
            return Err(TrophosError::InvalidIndex(prey));
        }
        if predator == prey {
            return Err(TrophosError::SelfLoop(predator));
        }
        if self.species[predator.0].prey.contains(&prey) {
            return Err(TrophosError::DuplicateRelation(predator, prey));
        }

        self.species[predator.0].prey.push(prey);
        Ok(())
    }

    /// Remove the species at `index` and renumber the whole web.
    ///
    /// Every species above `index` shifts down one position, prey entries
    /// pointing at the removed species are dropped, and prey entries above
    /// it are decremented to follow the shift. Relative order of surviving
    /// entries is preserved. Returns the removed species.
    ///
    /// Validation happens before any mutation and the renumbering pass is
    /// allocation-free, so the operation is all-or-nothing: no caller ever
    /// observes a half-renumbered web.
    pub fn remove_species(&mut self, index: SpeciesIndex) -> Result<Species, TrophosError> {
        if self.species.is_empty() {
            return Err(TrophosError::EmptyWeb);
        }
        if index.0 >= self.species.len() {
            return Err(TrophosError::InvalidIndex(index));
        }

        let removed = self.species.remove(index.0);
        for species in &mut self.species {
            species.prey.retain_mut(|entry| {
                if *entry == index {
                    return false;
                }
                if entry.0 > index.0 {
                    entry.0 = entry.0.saturating_sub(1);
                }
                true
            });
        }
        Ok(removed)
    }

    /// Get the species at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: SpeciesIndex) -> Option<&Species> {
        self.species.get(index.0)
    }

    /// Enumerate all species in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SpeciesIndex, &Species)> {
        self.species
            .iter()
            .enumerate()
            .map(|(position, species)| (SpeciesIndex(position), species))
    }

    /// Check whether a predator/prey relation is present.
    #[must_use]
    pub fn contains_relation(&self, predator: SpeciesIndex, prey: SpeciesIndex) -> bool {
        self.species
            .get(predator.0)
            .is_some_and(|species| species.prey.contains(&prey))
    }

    /// Get the total number of species.
    #[must_use]
    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    /// Check whether the web has no species.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Get the total number of relations across all prey sequences.
    #[must_use]
    pub fn relation_count(&self) -> usize {
        self.species.iter().map(Species::prey_count).sum()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn three_species_web() -> FoodWeb {
        let mut web = FoodWeb::new();
        web.insert_species("Grass");
        web.insert_species("Rabbit");
        web.insert_species("Fox");
        web
    }

    #[test]
    fn insert_returns_next_free_index() {
        let mut web = FoodWeb::new();
        assert_eq!(web.insert_species("Grass"), SpeciesIndex(0));
        assert_eq!(web.insert_species("Rabbit"), SpeciesIndex(1));
        assert_eq!(web.species_count(), 2);
    }

    #[test]
    fn insert_never_moves_existing_species() {
        let mut web = three_species_web();
        web.add_relation(SpeciesIndex(1), SpeciesIndex(0))
            .expect("relation");

        web.insert_species("Hawk");

        assert_eq!(web.get(SpeciesIndex(0)).map(Species::name), Some("Grass"));
        assert_eq!(web.get(SpeciesIndex(2)).map(Species::name), Some("Fox"));
        assert!(web.contains_relation(SpeciesIndex(1), SpeciesIndex(0)));
    }

    #[test]
    fn add_relation_appends_in_order() {
        let mut web = three_species_web();
        web.insert_species("Hawk");

        web.add_relation(SpeciesIndex(3), SpeciesIndex(2))
            .expect("relation");
        web.add_relation(SpeciesIndex(3), SpeciesIndex(1))
            .expect("relation");

        let hawk = web.get(SpeciesIndex(3)).expect("species");
        assert_eq!(hawk.prey(), &[SpeciesIndex(2), SpeciesIndex(1)]);
    }

    #[test]
    fn add_relation_rejects_out_of_bounds() {
        let mut web = three_species_web();

        let bad_predator = web.add_relation(SpeciesIndex(3), SpeciesIndex(0));
        assert!(matches!(bad_predator, Err(TrophosError::InvalidIndex(_))));

        let bad_prey = web.add_relation(SpeciesIndex(0), SpeciesIndex(9));
        assert!(matches!(bad_prey, Err(TrophosError::InvalidIndex(_))));

        assert_eq!(web.relation_count(), 0);
    }

    #[test]
    fn add_relation_rejects_self_loop() {
        let mut web = three_species_web();
        let result = web.add_relation(SpeciesIndex(0), SpeciesIndex(0));
        assert!(matches!(result, Err(TrophosError::SelfLoop(_))));
        assert_eq!(web.relation_count(), 0);
    }

    #[test]
    fn add_relation_rejects_duplicate() {
        let mut web = three_species_web();
        web.add_relation(SpeciesIndex(2), SpeciesIndex(1))
            .expect("relation");

        let duplicate = web.add_relation(SpeciesIndex(2), SpeciesIndex(1));
        assert!(matches!(
            duplicate,
            Err(TrophosError::DuplicateRelation(_, _))
        ));

        let fox = web.get(SpeciesIndex(2)).expect("species");
        assert_eq!(fox.prey_count(), 1);
    }

    #[test]
    fn rejected_mutations_leave_web_unchanged() {
        let mut web = three_species_web();
        web.add_relation(SpeciesIndex(1), SpeciesIndex(0))
            .expect("relation");
        let before = web.clone();

        let _ = web.add_relation(SpeciesIndex(1), SpeciesIndex(0));
        let _ = web.add_relation(SpeciesIndex(1), SpeciesIndex(1));
        let _ = web.add_relation(SpeciesIndex(5), SpeciesIndex(0));
        let _ = web.remove_species(SpeciesIndex(9));

        assert_eq!(web, before);
    }

    #[test]
    fn remove_from_empty_web_fails() {
        let mut web = FoodWeb::new();
        let result = web.remove_species(SpeciesIndex(0));
        assert!(matches!(result, Err(TrophosError::EmptyWeb)));
    }

    #[test]
    fn remove_out_of_bounds_fails() {
        let mut web = three_species_web();
        let result = web.remove_species(SpeciesIndex(3));
        assert!(matches!(result, Err(TrophosError::InvalidIndex(_))));
        assert_eq!(web.species_count(), 3);
    }

    #[test]
    fn remove_last_species_empties_web() {
        let mut web = FoodWeb::new();
        web.insert_species("Lichen");

        let removed = web.remove_species(SpeciesIndex(0)).expect("remove");
        assert_eq!(removed.name(), "Lichen");
        assert!(web.is_empty());
        assert_eq!(web.relation_count(), 0);
    }

    #[test]
    fn remove_renumbers_surviving_prey() {
        // Rabbit eats Grass, Fox eats Rabbit. Removing Grass must leave
        // Rabbit with nothing to eat and renumber Fox's prey from 1 to 0.
        let mut web = three_species_web();
        web.add_relation(SpeciesIndex(1), SpeciesIndex(0))
            .expect("relation");
        web.add_relation(SpeciesIndex(2), SpeciesIndex(1))
            .expect("relation");

        let removed = web.remove_species(SpeciesIndex(0)).expect("remove");
        assert_eq!(removed.name(), "Grass");

        assert_eq!(web.species_count(), 2);
        let rabbit = web.get(SpeciesIndex(0)).expect("species");
        assert_eq!(rabbit.name(), "Rabbit");
        assert!(rabbit.is_producer());

        let fox = web.get(SpeciesIndex(1)).expect("species");
        assert_eq!(fox.name(), "Fox");
        assert_eq!(fox.prey(), &[SpeciesIndex(0)]);
    }

    #[test]
    fn remove_preserves_order_of_surviving_entries() {
        let mut web = FoodWeb::new();
        for name in ["A", "B", "C", "D", "E"] {
            web.insert_species(name);
        }
        // E eats D, A, C, B in that order.
        for prey in [3, 0, 2, 1] {
            web.add_relation(SpeciesIndex(4), SpeciesIndex(prey))
                .expect("relation");
        }

        web.remove_species(SpeciesIndex(1)).expect("remove");

        // B's entry is gone; D and C shift down; A keeps its index.
        let predator = web.get(SpeciesIndex(3)).expect("species");
        assert_eq!(
            predator.prey(),
            &[SpeciesIndex(2), SpeciesIndex(0), SpeciesIndex(1)]
        );
    }

    #[test]
    fn remove_discards_removed_species_own_prey() {
        let mut web = three_species_web();
        web.add_relation(SpeciesIndex(2), SpeciesIndex(0))
            .expect("relation");
        web.add_relation(SpeciesIndex(2), SpeciesIndex(1))
            .expect("relation");

        web.remove_species(SpeciesIndex(2)).expect("remove");

        assert_eq!(web.species_count(), 2);
        assert_eq!(web.relation_count(), 0);
    }

    #[test]
    fn contains_relation_matches_prey_sequences() {
        let mut web = three_species_web();
        web.add_relation(SpeciesIndex(1), SpeciesIndex(0))
            .expect("relation");

        assert!(web.contains_relation(SpeciesIndex(1), SpeciesIndex(0)));
        assert!(!web.contains_relation(SpeciesIndex(0), SpeciesIndex(1)));
        assert!(!web.contains_relation(SpeciesIndex(9), SpeciesIndex(0)));
    }

    #[test]
    fn iter_enumerates_in_index_order() {
        let web = three_species_web();
        let names: Vec<_> = web.iter().map(|(_, species)| species.name()).collect();
        assert_eq!(names, vec!["Grass", "Rabbit", "Fox"]);

        let indices: Vec<_> = web.iter().map(|(index, _)| index).collect();
        assert_eq!(
            indices,
            vec![SpeciesIndex(0), SpeciesIndex(1), SpeciesIndex(2)]
        );
    }

    #[test]
    fn validate_name_accepts_plain_tokens() {
        assert!(validate_name("Grass").is_ok());
        assert!(validate_name("Sea-Otter").is_ok());
    }

    #[test]
    fn validate_name_rejects_bad_input() {
        assert!(matches!(
            validate_name(""),
            Err(TrophosError::InvalidName(_))
        ));
        assert!(matches!(
            validate_name("a-name-well-beyond-the-limit"),
            Err(TrophosError::InvalidName(_))
        ));
        assert!(matches!(
            validate_name("two words"),
            Err(TrophosError::InvalidName(_))
        ));
    }
}
