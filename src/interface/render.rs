use crate::catalog::RescoreSummary;
use crate::models::ScoreBreakdown;
use crate::scoring::calculations::{display_score, format_score, score_hue};
use crate::scoring::constants::{CARBS_BAND, FAT_BAND, PROTEIN_BAND, SCORE_SCALE};
use crate::scoring::ranking::{ComparisonRow, RankedFood};

const BAR_WIDTH: usize = 20;

/// Text bar for a score, e.g. `[##########----------]`.
pub fn score_bar(score: f64) -> String {
    let filled = if score.is_finite() {
        ((display_score(score) / SCORE_SCALE) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Traffic-light word for the bar hue.
pub fn score_rating(score: f64) -> &'static str {
    if !score.is_finite() {
        return "unknown";
    }
    match score_hue(score) {
        h if h < 40.0 => "poor",
        h if h < 80.0 => "fair",
        _ => "good",
    }
}

fn percent(share: f64) -> String {
    format!("{:.0}%", share * 100.0)
}

fn band_range(low: f64, high: f64) -> String {
    format!("{:.0}-{:.0}%", low * 100.0, high * 100.0)
}

/// Display how a food's score was derived.
pub fn display_breakdown(name: &str, breakdown: &ScoreBreakdown) {
    println!();
    println!("=== Nutrition Score: {} ===", name);
    println!();
    println!(
        "{}  {}  ({})",
        format_score(breakdown.total_score),
        score_bar(breakdown.total_score),
        score_rating(breakdown.total_score)
    );
    println!();

    println!("1. Protein (30%)       +{:.2} pts", breakdown.protein_score);
    println!("   {:.1}g per 100g (30g = max 3 pts)", breakdown.per_100g.protein);

    let rule = breakdown.carb_rule.unwrap_or("default");
    println!("2. Carb Quality (30%)  +{:.2} pts", breakdown.carb_quality_score);
    println!("   category rule: {} ({:.1} raw)", rule, breakdown.carb_quality_raw);

    println!("3. Balance (40%)       +{:.2} pts", breakdown.nutrient_balance_score);
    match breakdown.shares {
        Some(shares) => println!(
            "   Current: P {}, C {}, F {}",
            percent(shares.protein),
            percent(shares.carbs),
            percent(shares.fat)
        ),
        None => println!("   Current: no macro calories"),
    }
    println!(
        "   Ideal: Protein {}, Carbs {}, Fat {}",
        band_range(PROTEIN_BAND.low, PROTEIN_BAND.high),
        band_range(CARBS_BAND.low, CARBS_BAND.high),
        band_range(FAT_BAND.low, FAT_BAND.high)
    );

    println!();
    println!(
        "{:.2} + {:.2} + {:.2} = {}",
        breakdown.protein_score,
        breakdown.carb_quality_score,
        breakdown.nutrient_balance_score,
        format_score(breakdown.total_score)
    );
    println!();
}

/// Display a ranked list of foods.
pub fn display_ranked_list(ranked: &[RankedFood], title: &str) {
    if ranked.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, ranked.len());
    println!();

    let name_width = ranked
        .iter()
        .map(|r| r.food.name.len())
        .max()
        .unwrap_or(10);

    for (i, entry) in ranked.iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  {:<14}  {:>13}  {}",
            i + 1,
            entry.food.name,
            entry.food.category,
            format_score(entry.score),
            score_bar(entry.score),
            width = name_width
        );
    }

    println!();
}

fn print_row(label: &str, values: &[String], label_width: usize, col_width: usize) {
    let cells: Vec<String> = values
        .iter()
        .map(|v| format!("{:>width$}", v, width = col_width))
        .collect();
    println!("{:<lw$}{}", label, cells.join("  "), lw = label_width);
}

/// Display a side-by-side comparison, per serving and per 100 g.
pub fn display_comparison(rows: &[ComparisonRow]) {
    let label_width = 18;
    let col_width = rows
        .iter()
        .map(|r| r.food.name.len())
        .max()
        .unwrap_or(10)
        .max(14);

    let names: Vec<String> = rows.iter().map(|r| r.food.name.clone()).collect();

    println!();
    println!("=== Nutrition Comparison (Per Serving) ===");
    println!();
    print_row("Nutrient", &names, label_width, col_width);
    print_row(
        "Serving",
        &rows.iter().map(|r| format!("{}g", r.serving_size)).collect::<Vec<_>>(),
        label_width,
        col_width,
    );
    print_row(
        "Calories",
        &rows
            .iter()
            .map(|r| format!("{} kcal", r.food.calories_per_serving))
            .collect::<Vec<_>>(),
        label_width,
        col_width,
    );
    print_row(
        "Protein",
        &rows.iter().map(|r| format!("{}g", r.food.protein_content)).collect::<Vec<_>>(),
        label_width,
        col_width,
    );
    print_row(
        "Fat",
        &rows.iter().map(|r| format!("{}g", r.food.fat_content)).collect::<Vec<_>>(),
        label_width,
        col_width,
    );
    print_row(
        "Carbohydrates",
        &rows
            .iter()
            .map(|r| format!("{}g", r.food.carbohydrate_content))
            .collect::<Vec<_>>(),
        label_width,
        col_width,
    );
    print_row(
        "Nutrition Score",
        &rows
            .iter()
            .map(|r| format_score(r.breakdown.total_score))
            .collect::<Vec<_>>(),
        label_width,
        col_width,
    );

    println!();
    println!("=== Nutrition Comparison (Per 100g) ===");
    println!();
    print_row("Nutrient", &names, label_width, col_width);
    print_row(
        "Calories",
        &rows
            .iter()
            .map(|r| format!("{:.1} kcal", r.calories_per_100g))
            .collect::<Vec<_>>(),
        label_width,
        col_width,
    );
    print_row(
        "Protein",
        &rows.iter().map(|r| format!("{:.1}g", r.per_100g.protein)).collect::<Vec<_>>(),
        label_width,
        col_width,
    );
    print_row(
        "Fat",
        &rows.iter().map(|r| format!("{:.1}g", r.per_100g.fat)).collect::<Vec<_>>(),
        label_width,
        col_width,
    );
    print_row(
        "Carbohydrates",
        &rows.iter().map(|r| format!("{:.1}g", r.per_100g.carbs)).collect::<Vec<_>>(),
        label_width,
        col_width,
    );
    println!();
}

/// Display the outcome of a batch re-score.
pub fn display_rescore_summary(summary: &RescoreSummary) {
    println!(
        "Scored {} foods: {} updated, {} unchanged.",
        summary.total(),
        summary.updated,
        summary.unchanged
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bar() {
        assert_eq!(score_bar(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(score_bar(10.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(score_bar(5.0), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(score_bar(42.0), score_bar(10.0));
        assert_eq!(score_bar(f64::NAN), score_bar(0.0));
    }

    #[test]
    fn test_score_rating() {
        assert_eq!(score_rating(1.0), "poor");
        assert_eq!(score_rating(5.0), "fair");
        assert_eq!(score_rating(9.0), "good");
        assert_eq!(score_rating(f64::NAN), "unknown");
    }

    #[test]
    fn test_band_range() {
        assert_eq!(band_range(PROTEIN_BAND.low, PROTEIN_BAND.high), "10-35%");
        assert_eq!(percent(0.5), "50%");
    }
}
