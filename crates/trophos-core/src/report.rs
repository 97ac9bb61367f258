//! # Web Reports
//!
//! Headline selections over the analyses: who sits on top of the web, who
//! feeds it, who eats the widest diet, and who gets eaten most. `WebReport`
//! bundles them with heights and classification into one serializable
//! snapshot for display layers.

use crate::{FoodWeb, SpeciesIndex, VoreGroups, analysis};
use serde::Serialize;

// =============================================================================
// HEADLINE SELECTIONS
// =============================================================================

/// Species nothing preys on (fan-in zero), in ascending index order.
#[must_use]
pub fn apex_predators(web: &FoodWeb) -> Vec<SpeciesIndex> {
    analysis::fan_in_counts(web)
        .iter()
        .enumerate()
        .filter(|&(_, &eaten_by)| eaten_by == 0)
        .map(|(position, _)| SpeciesIndex(position))
        .collect()
}

/// Species that eat nothing (fan-out zero), in ascending index order.
#[must_use]
pub fn producers(web: &FoodWeb) -> Vec<SpeciesIndex> {
    web.iter()
        .filter(|(_, species)| species.is_producer())
        .map(|(index, _)| index)
        .collect()
}

/// Every species tied for the widest diet (maximum fan-out).
///
/// A web with no relations has a maximum fan-out of zero, so every species
/// qualifies.
#[must_use]
pub fn most_flexible_eaters(web: &FoodWeb) -> Vec<SpeciesIndex> {
    indices_at_max(&analysis::fan_out_counts(web))
}

/// Every species tied for most-eaten (maximum fan-in).
///
/// Same tie rule as [`most_flexible_eaters`]: a relation-free web puts
/// every species at the maximum of zero.
#[must_use]
pub fn tastiest_food(web: &FoodWeb) -> Vec<SpeciesIndex> {
    indices_at_max(&analysis::fan_in_counts(web))
}

/// All positions holding the maximum count; empty only for empty input.
fn indices_at_max(counts: &[usize]) -> Vec<SpeciesIndex> {
    let Some(max) = counts.iter().copied().max() else {
        return Vec::new();
    };
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count == max)
        .map(|(position, _)| SpeciesIndex(position))
        .collect()
}

// =============================================================================
// AGGREGATED REPORT
// =============================================================================

/// One consistent snapshot of every derived view of the web.
///
/// Built in a single call so all sections describe the same web state;
/// display layers render it as text or serialize it as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebReport {
    pub apex_predators: Vec<SpeciesIndex>,
    pub producers: Vec<SpeciesIndex>,
    pub most_flexible_eaters: Vec<SpeciesIndex>,
    pub tastiest_food: Vec<SpeciesIndex>,
    pub heights: Vec<usize>,
    pub vore_groups: VoreGroups,
}

impl WebReport {
    /// Compute the full report for the web's current state.
    #[must_use]
    pub fn from_web(web: &FoodWeb) -> Self {
        Self {
            apex_predators: apex_predators(web),
            producers: producers(web),
            most_flexible_eaters: most_flexible_eaters(web),
            tastiest_food: tastiest_food(web),
            heights: analysis::trophic_heights(web),
            vore_groups: analysis::classify(web),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_web() -> FoodWeb {
        let mut web = FoodWeb::new();
        web.insert_species("Grass");
        web.insert_species("Rabbit");
        web.insert_species("Fox");
        web.add_relation(SpeciesIndex(1), SpeciesIndex(0))
            .expect("relation");
        web.add_relation(SpeciesIndex(2), SpeciesIndex(1))
            .expect("relation");
        web
    }

    #[test]
    fn apex_predators_have_no_eaters() {
        let web = chain_web();
        assert_eq!(apex_predators(&web), vec![SpeciesIndex(2)]);
    }

    #[test]
    fn producers_eat_nothing() {
        let web = chain_web();
        assert_eq!(producers(&web), vec![SpeciesIndex(0)]);
    }

    #[test]
    fn flexible_eaters_take_every_tie() {
        // Everyone in the chain eats at most one thing, so both eaters tie.
        let web = chain_web();
        assert_eq!(
            most_flexible_eaters(&web),
            vec![SpeciesIndex(1), SpeciesIndex(2)]
        );
    }

    #[test]
    fn relation_free_web_ties_everyone_at_zero() {
        let mut web = FoodWeb::new();
        web.insert_species("Moss");
        web.insert_species("Fern");

        let everyone = vec![SpeciesIndex(0), SpeciesIndex(1)];
        assert_eq!(most_flexible_eaters(&web), everyone);
        assert_eq!(tastiest_food(&web), everyone);
        assert_eq!(apex_predators(&web), everyone);
        assert_eq!(producers(&web), everyone);
    }

    #[test]
    fn tastiest_food_is_most_eaten() {
        let mut web = chain_web();
        web.insert_species("Deer");
        web.add_relation(SpeciesIndex(3), SpeciesIndex(0))
            .expect("relation");

        // Grass is eaten by Rabbit and Deer; everything else at most once.
        assert_eq!(tastiest_food(&web), vec![SpeciesIndex(0)]);
    }

    #[test]
    fn report_sections_agree_with_analyses() {
        let web = chain_web();
        let report = WebReport::from_web(&web);

        assert_eq!(report.apex_predators, apex_predators(&web));
        assert_eq!(report.heights, vec![0, 1, 2]);
        assert_eq!(report.vore_groups.total(), 3);
        assert_eq!(report.producers, report.vore_groups.producers);
    }

    #[test]
    fn empty_web_yields_empty_report() {
        let report = WebReport::from_web(&FoodWeb::new());
        assert!(report.apex_predators.is_empty());
        assert!(report.producers.is_empty());
        assert!(report.most_flexible_eaters.is_empty());
        assert!(report.tastiest_food.is_empty());
        assert!(report.heights.is_empty());
        assert_eq!(report.vore_groups.total(), 0);
    }
}
