use std::collections::HashMap;

use strsim::jaro_winkler;
use tracing::{debug, info};

use crate::catalog::persistence::dedup_in_order;
use crate::models::Food;
use crate::scoring::calculations::stored_score;
use crate::scoring::ranking::category_matches;

/// Outcome of a batch re-score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RescoreSummary {
    /// Records whose persisted score was missing or differed.
    pub updated: usize,
    /// Records already carrying the current score.
    pub unchanged: usize,
}

impl RescoreSummary {
    pub fn total(&self) -> usize {
        self.updated + self.unchanged
    }
}

/// In-memory food catalog in file order, indexed by lowercase name.
pub struct FoodCatalog {
    foods: Vec<Food>,
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Create a catalog from a list of foods; later duplicates win.
    pub fn new(foods: Vec<Food>) -> Self {
        let foods = dedup_in_order(foods);
        let index = foods
            .iter()
            .enumerate()
            .map(|(i, food)| (food.key(), i))
            .collect();
        Self { foods, index }
    }

    /// Get a food by name (case-insensitive).
    pub fn get_food(&self, name: &str) -> Option<&Food> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| &self.foods[i])
    }

    /// Foods whose name resembles `query`, most similar first.
    pub fn find_similar(&self, query: &str, threshold: f64) -> Vec<(&Food, f64)> {
        let query = query.to_lowercase();

        let mut candidates: Vec<(&Food, f64)> = self
            .foods
            .iter()
            .map(|food| (food, jaro_winkler(&food.key(), &query)))
            .filter(|(_, score)| *score > threshold)
            .collect();

        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.name.cmp(&b.0.name))
        });

        debug!(query = %query, matches = candidates.len(), "fuzzy lookup");
        candidates
    }

    /// Foods in any of the given lowercase categories; empty keeps all.
    pub fn in_categories(&self, categories: &[String]) -> Vec<&Food> {
        self.foods
            .iter()
            .filter(|f| category_matches(&f.category, categories))
            .collect()
    }

    /// Get all foods.
    pub fn all_foods(&self) -> Vec<&Food> {
        self.foods.iter().collect()
    }

    /// Recompute and store the persisted score of every food.
    pub fn rescore_all(&mut self) -> RescoreSummary {
        let mut summary = RescoreSummary::default();

        for food in self.foods.iter_mut() {
            let score = stored_score(&food.nutrition_input());
            let same = food
                .nutrition_score
                .is_some_and(|old| old == score || (old.is_nan() && score.is_nan()));

            if same {
                summary.unchanged += 1;
            } else {
                debug!(
                    food = %food.name,
                    old = ?food.nutrition_score,
                    new = score,
                    "score changed"
                );
                food.nutrition_score = Some(score);
                summary.updated += 1;
            }
        }

        info!(
            updated = summary.updated,
            unchanged = summary.unchanged,
            "rescored catalog"
        );
        summary
    }

    /// Copy out the foods, in catalog order, for serialization.
    pub fn to_foods(&self) -> Vec<Food> {
        self.foods.clone()
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if the catalog has no foods.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
