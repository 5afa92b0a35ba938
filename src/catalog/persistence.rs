use std::borrow::Borrow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::Food;

/// Collapse foods sharing a lowercase name.
///
/// A duplicate replaces the earlier record's content but keeps its position,
/// so the first-seen order of the file survives.
pub(crate) fn dedup_in_order<T: Borrow<Food>>(foods: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<T> = Vec::new();

    for food in foods {
        let key = food.borrow().key();
        match index.get(&key) {
            Some(&i) => deduped[i] = food,
            None => {
                index.insert(key, deduped.len());
                deduped.push(food);
            }
        }
    }
    deduped
}

/// Load foods from a JSON catalog file.
///
/// Deduplicates by lowercase name (last occurrence wins, file order kept).
/// Records with negative amounts are kept but logged.
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<Food>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let foods: Vec<Food> = serde_json::from_str(&content)?;
    let raw_count = foods.len();

    for food in foods.iter().filter(|f| !f.is_valid()) {
        warn!(food = %food.debug_string(), "catalog entry has negative amounts");
    }

    let foods = dedup_in_order(foods);
    if foods.len() < raw_count {
        warn!(
            duplicates = raw_count - foods.len(),
            "duplicate food names collapsed"
        );
    }
    debug!(path = %path.display(), count = foods.len(), "loaded catalog");

    Ok(foods)
}

/// Save foods to a JSON catalog file.
///
/// Deduplicates by lowercase name and writes in the given order.
pub fn save_foods<P: AsRef<Path>>(path: P, foods: &[Food]) -> Result<()> {
    let path = path.as_ref();
    let deduped = dedup_in_order(foods);

    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), count = deduped.len(), "saved catalog");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"[
            {"name": "Oatmeal", "category": "Grains", "servingSize": 40, "caloriesPerServing": 150, "proteinContent": 5, "fatContent": 3, "carbohydrateContent": 27, "nutritionScore": 5.1, "imageUrl": "https://example.com/oats.webp"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let foods = load_foods(file.path()).unwrap();
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].name, "Oatmeal");

        let out_file = NamedTempFile::new().unwrap();
        save_foods(out_file.path(), &foods).unwrap();

        let written = fs::read_to_string(out_file.path()).unwrap();
        assert!(written.contains("\"carbohydrateContent\""));
        assert!(written.contains("\"imageUrl\""));

        let reloaded = load_foods(out_file.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].serving_size, Some(40.0));
        assert_eq!(reloaded[0].nutrition_score, Some(5.1));
    }

    #[test]
    fn test_deduplication() {
        let json = r#"[
            {"name": "Apple", "category": "Fruit", "carbohydrateContent": 14},
            {"name": "apple", "category": "Fruit", "carbohydrateContent": 25}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let foods = load_foods(file.path()).unwrap();
        assert_eq!(foods.len(), 1);
        // Last occurrence wins
        assert_eq!(foods[0].carbohydrate_content, 25.0);
    }

    #[test]
    fn test_file_order_preserved() {
        let json = r#"[
            {"name": "Zucchini", "category": "Vegetable"},
            {"name": "Apple", "category": "Fruit"},
            {"name": "Mango", "category": "Fruit"},
            {"name": "ZUCCHINI", "category": "Vegetable", "proteinContent": 1.2}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let foods = load_foods(file.path()).unwrap();
        let names: Vec<&str> = foods.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["ZUCCHINI", "Apple", "Mango"]);

        save_foods(file.path(), &foods).unwrap();
        let written = fs::read_to_string(file.path()).unwrap();
        let zucchini = written.find("ZUCCHINI").unwrap();
        let apple = written.find("Apple").unwrap();
        let mango = written.find("Mango").unwrap();
        assert!(zucchini < apple && apple < mango);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(load_foods(file.path()).is_err());
    }
}
