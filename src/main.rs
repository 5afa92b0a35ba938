use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use food_score_rs::catalog::{load_foods, save_foods, write_csv, FoodCatalog};
use food_score_rs::cli::{Cli, Command};
use food_score_rs::error::{Result, ScoreError};
use food_score_rs::interface::{
    display_breakdown, display_comparison, display_ranked_list, display_rescore_summary,
    prompt_food_name, prompt_yes_no, resolve_food, resolve_foods,
};
use food_score_rs::models::FoodNutritionInput;
use food_score_rs::scoring::{
    compare_foods, parse_category_filter, rank_foods, score_breakdown, try_compute_score, SortOrder,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; RUST_LOG overrides the level picked by `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("food_score_rs={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::List {
            ascending,
            category,
            limit,
        } => cmd_list(&cli.file, ascending, category.as_deref(), limit),
        Command::Show { name } => cmd_show(&cli.file, name),
        Command::Score {
            protein,
            carbs,
            fat,
            serving_size,
            category,
            name,
            strict,
        } => {
            let input = FoodNutritionInput {
                protein_content: protein,
                carbohydrate_content: carbs,
                fat_content: fat,
                serving_size,
                category: &category,
                name: &name,
            };
            cmd_score(&input, strict)
        }
        Command::Compare { names } => cmd_compare(&cli.file, &names),
        Command::Rescore { dry_run, yes } => cmd_rescore(&cli.file, dry_run, yes),
        Command::Export { csv } => cmd_export(&cli.file, &csv),
    }
}

/// Load the catalog, or `None` (after telling the user) when the file is missing.
fn open_catalog(file_path: &str) -> Result<Option<FoodCatalog>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Food catalog file not found: {}", file_path);
        eprintln!("Pass --file or set FOOD_SCORE_FILE to point at a catalog JSON file.");
        return Ok(None);
    }

    let catalog = FoodCatalog::new(load_foods(path)?);
    if catalog.is_empty() {
        return Err(ScoreError::EmptyCatalog);
    }
    Ok(Some(catalog))
}

/// List foods ranked by score.
fn cmd_list(
    file_path: &str,
    ascending: bool,
    category: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let Some(catalog) = open_catalog(file_path)? else {
        return Ok(());
    };

    let order = if ascending {
        SortOrder::Ascending
    } else {
        SortOrder::Descending
    };
    let filter = category.map(parse_category_filter).unwrap_or_default();

    let mut ranked = rank_foods(&catalog.in_categories(&filter), order, &[]);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    display_ranked_list(&ranked, "Foods by Nutrition Score");
    Ok(())
}

/// Show the breakdown of one catalog food.
fn cmd_show(file_path: &str, name: Option<String>) -> Result<()> {
    let Some(catalog) = open_catalog(file_path)? else {
        return Ok(());
    };

    let query = match name {
        Some(name) => name,
        None => prompt_food_name()?,
    };

    match resolve_food(&catalog, &query)? {
        Some(food) => {
            let breakdown = score_breakdown(&food.nutrition_input());
            display_breakdown(&food.name, &breakdown);
        }
        None => println!("No food selected."),
    }

    Ok(())
}

/// Score an ad-hoc food.
fn cmd_score(input: &FoodNutritionInput, strict: bool) -> Result<()> {
    if strict {
        try_compute_score(input)?;
    }

    let label = if input.name.is_empty() {
        "(unnamed food)"
    } else {
        input.name
    };
    display_breakdown(label, &score_breakdown(input));
    Ok(())
}

/// Compare foods side by side.
fn cmd_compare(file_path: &str, names: &[String]) -> Result<()> {
    let Some(catalog) = open_catalog(file_path)? else {
        return Ok(());
    };

    let foods = resolve_foods(&catalog, names)?;
    let rows = compare_foods(&foods)?;
    display_comparison(&rows);
    Ok(())
}

/// Recompute and optionally persist every stored score.
fn cmd_rescore(file_path: &str, dry_run: bool, yes: bool) -> Result<()> {
    let Some(mut catalog) = open_catalog(file_path)? else {
        return Ok(());
    };

    let summary = catalog.rescore_all();
    display_rescore_summary(&summary);

    if dry_run || summary.updated == 0 {
        return Ok(());
    }

    let save = yes || prompt_yes_no("Save updated scores?", true)?;
    if save {
        save_foods(file_path, &catalog.to_foods())?;
        println!("Food catalog saved.");
    }

    Ok(())
}

/// Export score breakdowns to CSV.
fn cmd_export(file_path: &str, csv_path: &str) -> Result<()> {
    let Some(catalog) = open_catalog(file_path)? else {
        return Ok(());
    };

    write_csv(&catalog.all_foods(), Path::new(csv_path))?;
    println!("Wrote {} foods to {}", catalog.len(), csv_path);
    Ok(())
}
