#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod scoring;

pub use error::{Result, ScoreError};
pub use models::{Food, FoodNutritionInput, ScoreBreakdown};
pub use scoring::{compute_score, score_breakdown};
