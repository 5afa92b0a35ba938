use dialoguer::{Confirm, Input, Select};

use crate::catalog::FoodCatalog;
use crate::error::{Result, ScoreError};
use crate::models::Food;
use crate::scoring::constants::{FUZZY_MATCH_THRESHOLD, FUZZY_MAX_CANDIDATES};

/// Prompt for the name of a food to look up.
pub fn prompt_food_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Which food do you want to score?")
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Err(ScoreError::InvalidInput("Food name is empty".to_string()));
    }
    Ok(input.to_string())
}

/// Resolve a user-typed name to a catalog food.
///
/// Exact (case-insensitive) match first, then fuzzy matching: a single
/// candidate is confirmed, several are offered in a selection.
/// Returns `None` when the user declines every candidate.
pub fn resolve_food<'a>(catalog: &'a FoodCatalog, query: &str) -> Result<Option<&'a Food>> {
    let query = query.trim();

    if let Some(food) = catalog.get_food(query) {
        return Ok(Some(food));
    }

    let candidates = catalog.find_similar(query, FUZZY_MATCH_THRESHOLD);

    if candidates.is_empty() {
        return Err(ScoreError::FoodNotFound(query.to_string()));
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.name))
            .default(true)
            .interact()?;

        return Ok(confirm.then_some(food));
    }

    // Multiple matches - let user select
    let options: Vec<&Food> = candidates
        .iter()
        .take(FUZZY_MAX_CANDIDATES)
        .map(|(f, _)| *f)
        .collect();

    let mut labels: Vec<String> = options.iter().map(|f| f.name.clone()).collect();
    labels.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options.get(selection).copied())
}

/// Resolve several names, failing on the first one that cannot be resolved.
pub fn resolve_foods<'a>(catalog: &'a FoodCatalog, queries: &[String]) -> Result<Vec<&'a Food>> {
    let mut foods = Vec::with_capacity(queries.len());
    for query in queries {
        match resolve_food(catalog, query)? {
            Some(food) => foods.push(food),
            None => return Err(ScoreError::FoodNotFound(query.clone())),
        }
    }
    Ok(foods)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
