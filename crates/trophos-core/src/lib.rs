//! # trophos-core
//!
//! The deterministic food-web graph engine for Trophos - THE LOGIC.
//!
//! A food web is a dense vector of species addressed by positional index,
//! each carrying an ordered prey sequence. The engine's one hard problem is
//! keeping those positions honest: removing a species shifts everything
//! above it, so the same operation renumbers every surviving prey index in
//! the whole web before anyone can look.
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: no async, no network, no file I/O
//! - Deterministic: index-ordered passes only, no floats, no randomness
//! - Single-threaded: the web is one owned value mutated behind `&mut`
//! - Recoverable: rejected mutations report a reason and leave the web
//!   untouched; shipped code never panics

// =============================================================================
// MODULES
// =============================================================================

pub mod analysis;
pub mod report;
pub mod types;
pub mod web;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Species, SpeciesIndex, TrophosError, Vore};

// =============================================================================
// RE-EXPORTS: Web Engine
// =============================================================================

pub use web::{FoodWeb, MAX_NAME_LENGTH, validate_name};

// =============================================================================
// RE-EXPORTS: Analyses & Reports
// =============================================================================

pub use analysis::{
    VoreGroups, classify, fan_in_counts, fan_out_counts, trophic_heights, vore_types,
};
pub use report::{WebReport, apex_predators, most_flexible_eaters, producers, tastiest_food};
