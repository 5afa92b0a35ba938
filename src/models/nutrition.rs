use crate::error::{Result, ScoreError};
use crate::scoring::constants::DEFAULT_SERVING_SIZE;

/// Macronutrient profile of one food, as declared per serving.
///
/// Borrowed from the caller's record; the calculator never retains it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodNutritionInput<'a> {
    /// Grams of protein per serving.
    pub protein_content: f64,

    /// Grams of carbohydrate per serving.
    pub carbohydrate_content: f64,

    /// Grams of fat per serving.
    pub fat_content: f64,

    /// Grams per serving. `None` or a non-positive value means 100 g.
    pub serving_size: Option<f64>,

    /// Free-text category label, e.g. "Vegetable" or "Grains".
    pub category: &'a str,

    /// Food name; only consulted for the whole-grain heuristic.
    pub name: &'a str,
}

impl<'a> FoodNutritionInput<'a> {
    /// Input with a 100 g serving and empty labels.
    pub fn new(protein: f64, carbohydrate: f64, fat: f64) -> Self {
        Self {
            protein_content: protein,
            carbohydrate_content: carbohydrate,
            fat_content: fat,
            serving_size: None,
            category: "",
            name: "",
        }
    }

    pub fn with_serving_size(mut self, grams: f64) -> Self {
        self.serving_size = Some(grams);
        self
    }

    pub fn with_category(mut self, category: &'a str) -> Self {
        self.category = category;
        self
    }

    pub fn with_name(mut self, name: &'a str) -> Self {
        self.name = name;
        self
    }

    /// Serving size used for normalization.
    ///
    /// Absent or non-positive sizes become 100 g. NaN is passed through.
    pub fn normalized_serving_size(&self) -> f64 {
        match self.serving_size {
            Some(size) if size <= 0.0 => DEFAULT_SERVING_SIZE,
            Some(size) => size,
            None => DEFAULT_SERVING_SIZE,
        }
    }

    /// Reject negative or non-finite macros and a non-finite serving size.
    ///
    /// The plain calculator does not call this; see `try_compute_score`.
    pub fn validate(&self) -> Result<()> {
        let macros = [
            ("protein", self.protein_content),
            ("carbohydrate", self.carbohydrate_content),
            ("fat", self.fat_content),
        ];

        for (label, value) in macros {
            if !value.is_finite() {
                return Err(ScoreError::InvalidNutrition(format!(
                    "{} content is not a finite number",
                    label
                )));
            }
            if value < 0.0 {
                return Err(ScoreError::InvalidNutrition(format!(
                    "{} content is negative ({})",
                    label, value
                )));
            }
        }

        if let Some(size) = self.serving_size {
            if !size.is_finite() {
                return Err(ScoreError::InvalidNutrition(
                    "serving size is not a finite number".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Macro values normalized to 100 g.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Per100g {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Share of macro calories per nutrient, each in [0, 1] for sane input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroShares {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Band sub-scores behind the balance component.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BalanceScores {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl BalanceScores {
    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// How a nutrition score was put together.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// Scaled protein component, 0..=3.
    pub protein_score: f64,

    /// Scaled carb quality component, 0..=3.
    pub carb_quality_score: f64,

    /// Scaled balance component, 0..=4.
    pub nutrient_balance_score: f64,

    /// Sum of the components, clamped to [0, 10].
    pub total_score: f64,

    /// Protein points before scaling.
    pub protein_raw: f64,

    /// Carb quality points before scaling.
    pub carb_quality_raw: f64,

    /// Label of the carb rule that matched; `None` on the default path.
    pub carb_rule: Option<&'static str>,

    pub per_100g: Per100g,

    /// Calories from protein, carbs and fat per 100 g.
    pub total_macro_calories: f64,

    /// Absent when `total_macro_calories` is zero.
    pub shares: Option<MacroShares>,

    /// Absent when `total_macro_calories` is zero.
    pub balance: Option<BalanceScores>,
}

impl ScoreBreakdown {
    /// Unclamped component sum.
    pub fn raw_total(&self) -> f64 {
        self.protein_score + self.carb_quality_score + self.nutrient_balance_score
    }
}
