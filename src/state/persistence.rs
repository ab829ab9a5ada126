use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{MealType, NewFood};
use crate::state::NutriStore;

/// Load the store from a JSON file.
///
/// Deduplicates foods by lowercase name (last occurrence wins); meals on a
/// dropped food move to the kept one.
pub fn load_store<P: AsRef<Path>>(path: P) -> Result<NutriStore> {
    let content = fs::read_to_string(&path)?;
    let mut store: NutriStore = serde_json::from_str(&content)?;
    store.dedup_foods();

    info!(
        path = %path.as_ref().display(),
        users = store.users().len(),
        foods = store.foods().len(),
        meals = store.meals().len(),
        "loaded store"
    );
    Ok(store)
}

/// Load the store, or start empty when the file does not exist yet.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<NutriStore> {
    if path.as_ref().exists() {
        load_store(path)
    } else {
        info!(path = %path.as_ref().display(), "store file missing, starting empty");
        Ok(NutriStore::new())
    }
}

/// Save the store to a JSON file.
pub fn save_store<P: AsRef<Path>>(path: P, store: &NutriStore) -> Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    fs::write(&path, json)?;
    info!(path = %path.as_ref().display(), "saved store");
    Ok(())
}

/// One CSV row; the meal type column is free-form.
#[derive(Debug, Deserialize)]
struct FoodRow {
    name: String,
    kcal_100g: f64,
    protein_100g: f64,
    fat_100g: f64,
    carb_100g: f64,
    #[serde(default)]
    meal_type: Option<String>,
}

/// Read food rows from a CSV file with a header line.
///
/// Columns: name, kcal_100g, protein_100g, fat_100g, carb_100g, meal_type.
pub fn import_foods_csv<P: AsRef<Path>>(path: P) -> Result<Vec<NewFood>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut foods = Vec::new();

    for row in rdr.deserialize() {
        let row: FoodRow = row?;
        let meal_type = match row.meal_type.as_deref() {
            Some(label) if !label.trim().is_empty() => {
                MealType::parse_label(label).unwrap_or_else(|| {
                    warn!(food = %row.name, label, "unknown meal type, using default");
                    MealType::default()
                })
            }
            _ => MealType::default(),
        };

        foods.push(NewFood {
            name: row.name.trim().to_string(),
            kcal_100g: row.kcal_100g,
            protein_100g: row.protein_100g,
            fat_100g: row.fat_100g,
            carb_100g: row.carb_100g,
            meal_type,
        });
    }

    Ok(foods)
}
