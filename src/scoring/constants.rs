/// Upper bound of the nutrition score scale.
pub const SCORE_SCALE: f64 = 10.0;

/// Serving size substituted when none (or a non-positive one) is declared.
pub const DEFAULT_SERVING_SIZE: f64 = 100.0;

/// Reference mass all macros are normalized to.
pub const REFERENCE_GRAMS: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Component weights and raw maxima
// ─────────────────────────────────────────────────────────────────────────────

/// Share of the total score owned by protein density.
pub const PROTEIN_WEIGHT: f64 = 0.3;

/// Share of the total score owned by carbohydrate quality.
pub const CARB_QUALITY_WEIGHT: f64 = 0.3;

/// Share of the total score owned by macro balance.
pub const BALANCE_WEIGHT: f64 = 0.4;

/// Raw points available to each component before scaling.
pub const COMPONENT_RAW_MAX: f64 = 3.0;

/// Grams of protein per 100 g worth one raw point (30 g saturates).
pub const PROTEIN_GRAMS_PER_POINT: f64 = 10.0;

/// Energy per gram of protein and carbohydrate.
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Energy per gram of fat.
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Scale from raw component points to score points: `weight * 10 / 3`.
///
/// Kept as the literal expression so the folded constant matches the
/// backend's stored scores bit for bit.
#[inline]
pub fn component_scale(weight: f64) -> f64 {
    weight * SCORE_SCALE / COMPONENT_RAW_MAX
}

// ─────────────────────────────────────────────────────────────────────────────
// Carbohydrate quality rules
// ─────────────────────────────────────────────────────────────────────────────

/// One row of the carb quality table.
///
/// Matches when the lowercase category contains any of `category_any` and,
/// if set, the lowercase name contains `name_contains`.
#[derive(Debug, Clone, Copy)]
pub struct CarbQualityRule {
    pub label: &'static str,
    pub category_any: &'static [&'static str],
    pub name_contains: Option<&'static str>,
    pub raw_score: f64,
}

impl CarbQualityRule {
    /// Both arguments must already be lowercase.
    pub fn matches(&self, category: &str, name: &str) -> bool {
        let category_hit = self.category_any.iter().any(|c| category.contains(c));
        let name_hit = self.name_contains.is_none_or(|n| name.contains(n));
        category_hit && name_hit
    }
}

/// Evaluated top to bottom; the first match wins.
pub const CARB_QUALITY_RULES: &[CarbQualityRule] = &[
    CarbQualityRule {
        label: "vegetable/fruit",
        category_any: &["vegetable", "fruit"],
        name_contains: None,
        raw_score: 3.0,
    },
    CarbQualityRule {
        label: "whole grain",
        category_any: &["grain"],
        name_contains: Some("whole"),
        raw_score: 2.5,
    },
    CarbQualityRule {
        label: "grain",
        category_any: &["grain"],
        name_contains: None,
        raw_score: 2.0,
    },
    CarbQualityRule {
        label: "dairy",
        category_any: &["dairy"],
        name_contains: None,
        raw_score: 1.5,
    },
    CarbQualityRule {
        label: "sweets/snacks",
        category_any: &["sweets", "snacks"],
        name_contains: None,
        raw_score: 0.5,
    },
];

/// Raw carb quality when no rule matches.
pub const CARB_QUALITY_DEFAULT: f64 = 1.5;

// ─────────────────────────────────────────────────────────────────────────────
// Macro balance bands (share of macro calories)
// ─────────────────────────────────────────────────────────────────────────────

/// Target range for one macro's calorie share, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroBand {
    pub low: f64,
    pub high: f64,
    pub below: f64,
    pub within: f64,
    pub above: f64,
}

impl MacroBand {
    /// Sub-score for a calorie share. NaN yields NaN.
    pub fn score(&self, share: f64) -> f64 {
        if share.is_nan() {
            share
        } else if share < self.low {
            self.below
        } else if share <= self.high {
            self.within
        } else {
            self.above
        }
    }
}

/// Under-eating protein is penalized harder than over-eating it.
pub const PROTEIN_BAND: MacroBand = MacroBand {
    low: 0.10,
    high: 0.35,
    below: 0.5,
    within: 1.0,
    above: 0.7,
};

pub const CARBS_BAND: MacroBand = MacroBand {
    low: 0.45,
    high: 0.65,
    below: 0.7,
    within: 1.0,
    above: 0.7,
};

pub const FAT_BAND: MacroBand = MacroBand {
    low: 0.20,
    high: 0.35,
    below: 0.7,
    within: 1.0,
    above: 0.5,
};

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Hue of a 10/10 score bar (green); 0 is red.
pub const SCORE_HUE_MAX: f64 = 120.0;

/// Decimal places for persisted and displayed scores.
pub const SCORE_DECIMALS: u32 = 2;

/// Minimum Jaro-Winkler similarity for fuzzy food lookups.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum fuzzy candidates offered in a selection prompt.
pub const FUZZY_MAX_CANDIDATES: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_scales() {
        assert_eq!(component_scale(PROTEIN_WEIGHT), 1.0);
        assert_eq!(component_scale(CARB_QUALITY_WEIGHT), 1.0);
        assert_float_absolute_eq!(component_scale(BALANCE_WEIGHT), 4.0 / 3.0, 1e-12);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let sum = PROTEIN_WEIGHT + CARB_QUALITY_WEIGHT + BALANCE_WEIGHT;
        assert_float_absolute_eq!(sum, 1.0, 1e-12);
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        assert_eq!(PROTEIN_BAND.score(0.10), 1.0);
        assert_eq!(PROTEIN_BAND.score(0.35), 1.0);
        assert_eq!(PROTEIN_BAND.score(0.0999), 0.5);
        assert_eq!(PROTEIN_BAND.score(0.3501), 0.7);

        assert_eq!(CARBS_BAND.score(0.45), 1.0);
        assert_eq!(CARBS_BAND.score(0.65), 1.0);
        assert_eq!(CARBS_BAND.score(0.2), 0.7);
        assert_eq!(CARBS_BAND.score(0.9), 0.7);

        assert_eq!(FAT_BAND.score(0.20), 1.0);
        assert_eq!(FAT_BAND.score(0.1), 0.7);
        assert_eq!(FAT_BAND.score(0.5), 0.5);
        assert!(FAT_BAND.score(f64::NAN).is_nan());
    }

    #[test]
    fn test_whole_grain_rule_needs_name() {
        let rule = &CARB_QUALITY_RULES[1];
        assert!(rule.matches("grains", "whole wheat bread"));
        assert!(!rule.matches("grains", "white bread"));
        assert!(!rule.matches("bakery", "whole wheat bread"));
    }

    #[test]
    fn test_rule_maxima_within_component() {
        for rule in CARB_QUALITY_RULES {
            assert!(rule.raw_score <= COMPONENT_RAW_MAX, "{}", rule.label);
        }
        assert!(CARB_QUALITY_DEFAULT <= COMPONENT_RAW_MAX);
    }
}
