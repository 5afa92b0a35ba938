use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::FoodNutritionInput;

/// A food catalog entry, in the catalog's JSON field names.
///
/// Macro amounts are grams per declared serving. Fields the calculator does
/// not read (micronutrients, scraper metadata) are kept in `extra` so a
/// load/save cycle writes them back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub name: String,

    #[serde(default)]
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<f64>,

    #[serde(default)]
    pub calories_per_serving: f64,

    #[serde(default)]
    pub protein_content: f64,

    #[serde(default)]
    pub fat_content: f64,

    #[serde(default)]
    pub carbohydrate_content: f64,

    /// Last persisted score; `None` until the entry is scored.
    #[serde(default)]
    pub nutrition_score: Option<f64>,

    #[serde(default)]
    pub dietary_options: Vec<String>,

    #[serde(default)]
    pub allergens: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Food {
    /// Borrow the fields the score is computed from.
    pub fn nutrition_input(&self) -> FoodNutritionInput<'_> {
        FoodNutritionInput {
            protein_content: self.protein_content,
            carbohydrate_content: self.carbohydrate_content,
            fat_content: self.fat_content,
            serving_size: self.serving_size,
            category: &self.category,
            name: &self.name,
        }
    }

    /// Serving size used for per-100 g figures.
    pub fn effective_serving_size(&self) -> f64 {
        self.nutrition_input().normalized_serving_size()
    }

    /// Basic validation: non-negative amounts.
    pub fn is_valid(&self) -> bool {
        self.calories_per_serving >= 0.0
            && self.protein_content >= 0.0
            && self.fat_content >= 0.0
            && self.carbohydrate_content >= 0.0
            && self.serving_size.is_none_or(|s| s >= 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} kcal per {}g, P:{} C:{} F:{}",
            self.name,
            self.category,
            self.calories_per_serving,
            self.effective_serving_size(),
            self.protein_content,
            self.carbohydrate_content,
            self.fat_content
        )
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for Food {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for Food {}
