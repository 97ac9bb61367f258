//! # Core Type Definitions
//!
//! This module contains the core types for the Trophos food-web engine:
//! - Positional species addressing (`SpeciesIndex`)
//! - The species record (`Species`)
//! - Diet classification (`Vore`)
//! - Error types (`TrophosError`)
//!
//! ## Index Semantics
//!
//! A `SpeciesIndex` is a position in the web's dense species vector, not a
//! stable handle. Insertion never moves an existing species, but removing
//! one shifts every higher index down by one; the engine renumbers all
//! stored prey indices in the same operation so the web is never observable
//! with a stale index.

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// SPECIES ADDRESSING
// =============================================================================

/// Positional index of a species in the food web.
///
/// Valid only against the web state it was read from: any successful
/// removal may shift it. Callers that hold indices across mutations must
/// re-read them from the web.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SpeciesIndex(pub usize);

impl SpeciesIndex {
    /// Create a new species index.
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self(position)
    }

    /// Get the raw position value.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }
}

// =============================================================================
// SPECIES
// =============================================================================

/// A species in the food web.
///
/// Holds the display name and the ordered prey sequence (the indices of
/// everything this species eats, in insertion order). The sequence is
/// mutated only through `FoodWeb` operations, which maintain the
/// no-self-loop and no-duplicate invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Species {
    pub(crate) name: String,
    pub(crate) prey: Vec<SpeciesIndex>,
}

impl Species {
    /// Create a new species with an empty prey sequence.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prey: Vec::new(),
        }
    }

    /// Get the species name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the ordered prey sequence.
    #[must_use]
    pub fn prey(&self) -> &[SpeciesIndex] {
        &self.prey
    }

    /// Get the number of prey this species eats (its fan-out).
    #[must_use]
    pub fn prey_count(&self) -> usize {
        self.prey.len()
    }

    /// A producer eats nothing.
    #[must_use]
    pub fn is_producer(&self) -> bool {
        self.prey.is_empty()
    }
}

// =============================================================================
// DIET CLASSIFICATION
// =============================================================================

/// Diet classification of a species, derived from what it eats.
///
/// - `Producer`: empty prey sequence
/// - `Herbivore`: eats producers only
/// - `Carnivore`: eats non-producers only
/// - `Omnivore`: eats both
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Vore {
    Producer,
    Herbivore,
    Omnivore,
    Carnivore,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Trophos engine.
///
/// Every variant is recoverable: the offending operation is rejected and
/// the web is left exactly as it was. The `Display` text is the
/// human-readable reason handed to the caller.
#[derive(Debug, Error)]
pub enum TrophosError {
    /// The index is outside the current bounds of the species vector.
    #[error("Invalid species index: {0:?}")]
    InvalidIndex(SpeciesIndex),

    /// A species may not prey on itself.
    #[error("Species cannot prey on itself: {0:?}")]
    SelfLoop(SpeciesIndex),

    /// The prey is already present in the predator's sequence.
    #[error("Duplicate predator/prey relation: {0:?} -> {1:?}")]
    DuplicateRelation(SpeciesIndex, SpeciesIndex),

    /// A mutation was attempted on a web with no species.
    #[error("The food web is empty")]
    EmptyWeb,

    /// The species name was rejected before insertion.
    #[error("Invalid species name: {0}")]
    InvalidName(String),
}

// =============================================================================
// TESTS
// =============================================================================
