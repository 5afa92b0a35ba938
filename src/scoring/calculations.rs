use crate::error::Result;
use crate::models::{BalanceScores, FoodNutritionInput, MacroShares, Per100g, ScoreBreakdown};
use crate::scoring::constants::*;

/// Scale a per-serving amount to its per-100 g equivalent.
#[inline]
pub fn per_100g(value: f64, serving_size: f64) -> f64 {
    value * (REFERENCE_GRAMS / serving_size)
}

/// Normalize all three macros of an input to 100 g.
pub fn normalize(input: &FoodNutritionInput) -> Per100g {
    let serving = input.normalized_serving_size();
    Per100g {
        protein: per_100g(input.protein_content, serving),
        carbs: per_100g(input.carbohydrate_content, serving),
        fat: per_100g(input.fat_content, serving),
    }
}

/// Raw protein points: one per 10 g per 100 g, saturating at 3.
///
/// NaN passes through (`f64::min` would swallow it).
#[inline]
pub fn protein_raw_score(protein_100g: f64) -> f64 {
    let raw = protein_100g / PROTEIN_GRAMS_PER_POINT;
    if raw > COMPONENT_RAW_MAX {
        COMPONENT_RAW_MAX
    } else {
        raw
    }
}

/// First carb rule matching the category (and name, for whole grains).
pub fn match_carb_rule(category: &str, name: &str) -> Option<&'static CarbQualityRule> {
    let category = category.to_lowercase();
    let name = name.to_lowercase();
    CARB_QUALITY_RULES
        .iter()
        .find(|rule| rule.matches(&category, &name))
}

/// Raw carb quality points from the ordered category table.
pub fn carb_quality_raw_score(category: &str, name: &str) -> f64 {
    match_carb_rule(category, name)
        .map(|rule| rule.raw_score)
        .unwrap_or(CARB_QUALITY_DEFAULT)
}

/// Calories contributed by the three macros.
#[inline]
pub fn macro_calories(macros: &Per100g) -> f64 {
    macros.protein * KCAL_PER_GRAM_PROTEIN
        + macros.carbs * KCAL_PER_GRAM_CARBS
        + macros.fat * KCAL_PER_GRAM_FAT
}

/// Calorie shares per macro, or `None` for a food without macro calories.
pub fn macro_shares(macros: &Per100g) -> Option<MacroShares> {
    let total = macro_calories(macros);
    if total == 0.0 {
        return None;
    }

    Some(MacroShares {
        protein: macros.protein * KCAL_PER_GRAM_PROTEIN / total,
        carbs: macros.carbs * KCAL_PER_GRAM_CARBS / total,
        fat: macros.fat * KCAL_PER_GRAM_FAT / total,
    })
}

/// Map each share through its target band.
pub fn balance_scores(shares: &MacroShares) -> BalanceScores {
    BalanceScores {
        protein: PROTEIN_BAND.score(shares.protein),
        carbs: CARBS_BAND.score(shares.carbs),
        fat: FAT_BAND.score(shares.fat),
    }
}

/// Scaled balance component; zero when there are no macro calories.
pub fn nutrient_balance_score(macros: &Per100g) -> f64 {
    match macro_shares(macros) {
        Some(shares) => balance_scores(&shares).sum() * component_scale(BALANCE_WEIGHT),
        None => 0.0,
    }
}

/// Nutrition score of a food, nominally 0..=10.
///
/// Sum of protein density (30%), carb quality (30%) and macro balance (40%).
/// No clamping or validation happens here: negative macros shift the result
/// and NaN propagates. Use [`display_score`] before rendering, or
/// [`try_compute_score`] to reject bad input.
pub fn compute_score(input: &FoodNutritionInput) -> f64 {
    let macros = normalize(input);

    let protein = protein_raw_score(macros.protein) * component_scale(PROTEIN_WEIGHT);
    let carb_quality =
        carb_quality_raw_score(input.category, input.name) * component_scale(CARB_QUALITY_WEIGHT);
    let balance = nutrient_balance_score(&macros);

    protein + carb_quality + balance
}

/// Like [`compute_score`], but fails on negative or non-finite input.
pub fn try_compute_score(input: &FoodNutritionInput) -> Result<f64> {
    input.validate()?;
    Ok(compute_score(input))
}

/// Every intermediate value behind a score.
pub fn score_breakdown(input: &FoodNutritionInput) -> ScoreBreakdown {
    let macros = normalize(input);

    let protein_raw = protein_raw_score(macros.protein);
    let carb_rule = match_carb_rule(input.category, input.name);
    let carb_quality_raw = carb_rule
        .map(|rule| rule.raw_score)
        .unwrap_or(CARB_QUALITY_DEFAULT);

    let shares = macro_shares(&macros);
    let balance = shares.as_ref().map(balance_scores);

    let protein_score = protein_raw * component_scale(PROTEIN_WEIGHT);
    let carb_quality_score = carb_quality_raw * component_scale(CARB_QUALITY_WEIGHT);
    let nutrient_balance_score = balance
        .map(|b| b.sum() * component_scale(BALANCE_WEIGHT))
        .unwrap_or(0.0);

    let total = protein_score + carb_quality_score + nutrient_balance_score;

    ScoreBreakdown {
        protein_score,
        carb_quality_score,
        nutrient_balance_score,
        total_score: display_score(total),
        protein_raw,
        carb_quality_raw,
        carb_rule: carb_rule.map(|rule| rule.label),
        per_100g: macros,
        total_macro_calories: macro_calories(&macros),
        shares,
        balance,
    }
}

/// Round to the given number of decimal places.
///
/// Exact binary ties round away from zero (`0.125` -> `0.13`), not to even.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Score as persisted on catalog records: capped at 10, two decimals.
///
/// Only the upper bound is applied, matching stored catalog data.
pub fn stored_score(input: &FoodNutritionInput) -> f64 {
    round_to(compute_score(input).min(SCORE_SCALE), SCORE_DECIMALS)
}

/// Presentation clamp to [0, 10]. NaN stays NaN so callers can detect it.
pub fn display_score(score: f64) -> f64 {
    if score.is_nan() {
        return score;
    }
    score.clamp(0.0, SCORE_SCALE)
}

/// "x.xx / 10.00", or "n/a" for a non-finite score.
pub fn format_score(score: f64) -> String {
    if !score.is_finite() {
        return "n/a".to_string();
    }
    format!("{:.2} / {:.2}", display_score(score), SCORE_SCALE)
}

/// Score bar hue: 0 (red) at 0, 120 (green) at 10.
pub fn score_hue(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    display_score(score) / SCORE_SCALE * SCORE_HUE_MAX
}
