use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::Food;
use crate::scoring::calculations::{score_breakdown, stored_score};
use crate::scoring::ranking::{rank_foods, SortOrder};

const CSV_HEADER: [&str; 12] = [
    "rank",
    "name",
    "category",
    "serving_size",
    "protein_per_100g",
    "carbs_per_100g",
    "fat_per_100g",
    "protein_score",
    "carb_quality_score",
    "nutrient_balance_score",
    "total_score",
    "stored_score",
];

/// Write the score breakdown of every food to a CSV file, best first.
pub fn write_csv(foods: &[&Food], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(CSV_HEADER)?;

    let ranked = rank_foods(foods, SortOrder::Descending, &[]);

    for (i, entry) in ranked.iter().enumerate() {
        let input = entry.food.nutrition_input();
        let breakdown = score_breakdown(&input);

        wtr.write_record([
            (i + 1).to_string(),
            entry.food.name.clone(),
            entry.food.category.clone(),
            format!("{:.1}", input.normalized_serving_size()),
            format!("{:.1}", breakdown.per_100g.protein),
            format!("{:.1}", breakdown.per_100g.carbs),
            format!("{:.1}", breakdown.per_100g.fat),
            format!("{:.2}", breakdown.protein_score),
            format!("{:.2}", breakdown.carb_quality_score),
            format!("{:.2}", breakdown.nutrient_balance_score),
            format!("{:.2}", breakdown.total_score),
            format!("{:.2}", stored_score(&input)),
        ])?;
    }

    wtr.flush()?;
    debug!(path = %path.display(), rows = ranked.len(), "wrote CSV export");
    Ok(())
}
