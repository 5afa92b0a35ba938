use std::cmp::Ordering;

use crate::error::{Result, ScoreError};
use crate::models::{Food, Per100g, ScoreBreakdown};
use crate::scoring::calculations::{compute_score, normalize, per_100g, score_breakdown};

/// Sort direction for ranked listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// A catalog food paired with its freshly computed score.
#[derive(Debug, Clone)]
pub struct RankedFood<'a> {
    pub food: &'a Food,
    pub score: f64,
}

/// One column of a side-by-side comparison.
#[derive(Debug, Clone)]
pub struct ComparisonRow<'a> {
    pub food: &'a Food,
    pub serving_size: f64,
    pub calories_per_100g: f64,
    pub per_100g: Per100g,
    pub breakdown: ScoreBreakdown,
}

/// Split a comma-separated category filter into lowercase entries.
pub fn parse_category_filter(filter: &str) -> Vec<String> {
    filter
        .split(',')
        .map(|part| part.trim().to_lowercase())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Exact, case-insensitive category membership. An empty filter keeps all.
pub fn category_matches(category: &str, filter: &[String]) -> bool {
    filter.is_empty() || filter.iter().any(|c| *c == category.to_lowercase())
}

/// NaN scores always sort last; equal scores fall back to name order.
fn compare_ranked(a: &RankedFood, b: &RankedFood, order: SortOrder) -> Ordering {
    let by_score = match (a.score.is_nan(), b.score.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {
            let asc = a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal);
            match order {
                SortOrder::Ascending => asc,
                SortOrder::Descending => asc.reverse(),
            }
        }
    };

    by_score.then_with(|| a.food.name.to_lowercase().cmp(&b.food.name.to_lowercase()))
}

/// Rank foods by computed score, optionally keeping only some categories.
pub fn rank_foods<'a>(
    foods: &[&'a Food],
    order: SortOrder,
    category_filter: &[String],
) -> Vec<RankedFood<'a>> {
    let mut ranked: Vec<RankedFood<'a>> = foods
        .iter()
        .filter(|f| category_matches(&f.category, category_filter))
        .map(|&food| RankedFood {
            food,
            score: compute_score(&food.nutrition_input()),
        })
        .collect();

    ranked.sort_by(|a, b| compare_ranked(a, b, order));
    ranked
}

/// Build comparison columns; needs at least two foods.
pub fn compare_foods<'a>(foods: &[&'a Food]) -> Result<Vec<ComparisonRow<'a>>> {
    if foods.len() < 2 {
        return Err(ScoreError::InvalidInput(
            "At least two foods are needed for a comparison".to_string(),
        ));
    }

    Ok(foods
        .iter()
        .map(|&food| {
            let input = food.nutrition_input();
            let serving_size = input.normalized_serving_size();
            ComparisonRow {
                food,
                serving_size,
                calories_per_100g: per_100g(food.calories_per_serving, serving_size),
                per_100g: normalize(&input),
                breakdown: score_breakdown(&input),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(name: &str, category: &str, p: f64, c: f64, f: f64) -> Food {
        Food {
            name: name.to_string(),
            category: category.to_string(),
            serving_size: Some(100.0),
            calories_per_serving: p * 4.0 + c * 4.0 + f * 9.0,
            protein_content: p,
            fat_content: f,
            carbohydrate_content: c,
            nutrition_score: None,
            dietary_options: vec![],
            allergens: vec![],
            image_url: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_parse_category_filter() {
        assert_eq!(
            parse_category_filter(" Vegetable, grains ,,"),
            vec!["vegetable".to_string(), "grains".to_string()]
        );
        assert!(parse_category_filter("").is_empty());
    }

    #[test]
    fn test_rank_descending_default() {
        let chicken = food("Chicken", "Protein", 30.0, 0.0, 0.0);
        let candy = food("Candy", "Sweets", 0.0, 90.0, 5.0);
        let kale = food("Kale", "Vegetable", 3.0, 9.0, 0.7);

        let foods = vec![&candy, &kale, &chicken];
        let ranked = rank_foods(&foods, SortOrder::default(), &[]);

        let names: Vec<&str> = ranked.iter().map(|r| r.food.name.as_str()).collect();
        assert_eq!(names, vec!["Chicken", "Kale", "Candy"]);
        assert!(ranked[0].score >= ranked[1].score);
    }

    #[test]
    fn test_rank_ascending_with_filter() {
        let chicken = food("Chicken", "Protein", 30.0, 0.0, 0.0);
        let candy = food("Candy", "Sweets", 0.0, 90.0, 5.0);
        let kale = food("Kale", "Vegetable", 3.0, 9.0, 0.7);

        let foods = vec![&candy, &kale, &chicken];
        let filter = parse_category_filter("sweets,vegetable");
        let ranked = rank_foods(&foods, SortOrder::Ascending, &filter);

        let names: Vec<&str> = ranked.iter().map(|r| r.food.name.as_str()).collect();
        assert_eq!(names, vec!["Candy", "Kale"]);
    }

    #[test]
    fn test_nan_sorts_last() {
        let good = food("Good", "Vegetable", 3.0, 9.0, 0.7);
        let broken = food("Broken", "Vegetable", f64::NAN, 9.0, 0.7);

        let foods = vec![&broken, &good];
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let ranked = rank_foods(&foods, order, &[]);
            assert_eq!(ranked[0].food.name, "Good");
            assert!(ranked[1].score.is_nan());
        }
    }

    #[test]
    fn test_ties_break_by_name() {
        let a = food("apple", "Fruit", 0.0, 0.0, 0.0);
        let b = food("Banana", "Fruit", 0.0, 0.0, 0.0);
        let foods = vec![&b, &a];
        let ranked = rank_foods(&foods, SortOrder::Descending, &[]);
        assert_eq!(ranked[0].food.name, "apple");
    }

    #[test]
    fn test_compare_needs_two_foods() {
        let kale = food("Kale", "Vegetable", 3.0, 9.0, 0.7);
        assert!(compare_foods(&[&kale]).is_err());
    }

    #[test]
    fn test_compare_normalizes_serving() {
        let mut bread = food("Bread", "Grains", 4.0, 24.0, 1.0);
        bread.serving_size = Some(50.0);
        let kale = food("Kale", "Vegetable", 3.0, 9.0, 0.7);

        let rows = compare_foods(&[&bread, &kale]).unwrap();
        assert_eq!(rows.len(), 2);
        assert_float_absolute_eq!(rows[0].per_100g.protein, 8.0, 1e-9);
        assert_float_absolute_eq!(rows[0].per_100g.carbs, 48.0, 1e-9);
        assert_eq!(rows[0].serving_size, 50.0);
        assert_eq!(rows[1].breakdown.carb_rule, Some("vegetable/fruit"));
    }
}
