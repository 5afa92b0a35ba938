mod food;
mod nutrition;

pub use food::Food;
pub use nutrition::{BalanceScores, FoodNutritionInput, MacroShares, Per100g, ScoreBreakdown};
