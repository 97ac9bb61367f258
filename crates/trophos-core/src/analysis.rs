//! # Derived Analyses
//!
//! Read-only passes over the food web: degree counts, trophic heights,
//! and diet classification. Everything here is computed fresh from the
//! web on each call; nothing is cached, so results can never go stale
//! across mutations.

use crate::{FoodWeb, SpeciesIndex, Vore};
use serde::Serialize;

// =============================================================================
// DEGREE COUNTS
// =============================================================================

/// Fan-out of every species: how many prey each one eats.
///
/// Returned dense, indexed by species position.
#[must_use]
pub fn fan_out_counts(web: &FoodWeb) -> Vec<usize> {
    web.iter()
        .map(|(_, species)| species.prey_count())
        .collect()
}

/// Fan-in of every species: how many predators eat each one.
///
/// One pass over all prey sequences. Returned dense, indexed by species
/// position.
#[must_use]
pub fn fan_in_counts(web: &FoodWeb) -> Vec<usize> {
    let mut counts = vec![0usize; web.species_count()];
    for (_, species) in web.iter() {
        for prey in species.prey() {
            counts[prey.0] = counts[prey.0].saturating_add(1);
        }
    }
    counts
}

// =============================================================================
// TROPHIC HEIGHTS
// =============================================================================

/// Trophic height of every species, by iterative relaxation.
///
/// All heights start at zero; each pass recomputes, in index order and in
/// place, `height = 1 + max(prey heights)` for eaters and `0` for
/// producers, and the loop stops when a full pass changes nothing. No
/// recursion, no fixed pass count.
///
/// Recomputed heights are clamped to the species count. An acyclic web
/// cannot reach that value (its longest chain tops out one below), so
/// acyclic results match the recursive definition exactly; on a
/// predator/prey cycle the heights rise monotonically until they sit at
/// the clamp, which is what guarantees the no-change pass arrives on every
/// input.
#[must_use]
pub fn trophic_heights(web: &FoodWeb) -> Vec<usize> {
    let ceiling = web.species_count();
    let mut heights = vec![0usize; ceiling];

    let mut changed = true;
    while changed {
        changed = false;
        for (index, species) in web.iter() {
            let relaxed = match species.prey().iter().map(|prey| heights[prey.0]).max() {
                Some(tallest) => tallest.saturating_add(1).min(ceiling),
                None => 0,
            };
            if relaxed != heights[index.0] {
                heights[index.0] = relaxed;
                changed = true;
            }
        }
    }
    heights
}

// =============================================================================
// DIET CLASSIFICATION
// =============================================================================

/// Diet classification of every species, indexed by position.
///
/// Producer status is resolved against the current web first, so a
/// predator is judged by what its prey are now, not by what they ate when
/// the relation was added.
#[must_use]
pub fn vore_types(web: &FoodWeb) -> Vec<Vore> {
    let producer: Vec<bool> = web.iter().map(|(_, species)| species.is_producer()).collect();

    web.iter()
        .map(|(_, species)| {
            if species.is_producer() {
                return Vore::Producer;
            }
            let mut eats_producer = false;
            let mut eats_consumer = false;
            for prey in species.prey() {
                if producer[prey.0] {
                    eats_producer = true;
                } else {
                    eats_consumer = true;
                }
            }
            if eats_producer && eats_consumer {
                Vore::Omnivore
            } else if eats_producer {
                Vore::Herbivore
            } else {
                Vore::Carnivore
            }
        })
        .collect()
}

/// Species indices grouped by diet classification, each group in
/// ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VoreGroups {
    pub producers: Vec<SpeciesIndex>,
    pub herbivores: Vec<SpeciesIndex>,
    pub omnivores: Vec<SpeciesIndex>,
    pub carnivores: Vec<SpeciesIndex>,
}

impl VoreGroups {
    /// Total number of classified species across all four groups.
    #[must_use]
    pub fn total(&self) -> usize {
        self.producers
            .len()
            .saturating_add(self.herbivores.len())
            .saturating_add(self.omnivores.len())
            .saturating_add(self.carnivores.len())
    }
}

/// Group every species index by its diet classification.
#[must_use]
pub fn classify(web: &FoodWeb) -> VoreGroups {
    let mut groups = VoreGroups::default();
    for (position, vore) in vore_types(web).into_iter().enumerate() {
        let index = SpeciesIndex(position);
        match vore {
            Vore::Producer => groups.producers.push(index),
            Vore::Herbivore => groups.herbivores.push(index),
            Vore::Omnivore => groups.omnivores.push(index),
            Vore::Carnivore => groups.carnivores.push(index),
        }
    }
    groups
}

// =============================================================================
// TESTS
// =============================================================================
