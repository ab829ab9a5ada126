//! k-nearest-neighbor food recommendations.
//!
//! Foods are points in (kcal, protein, fat, carb) per-100g space; the
//! recommender returns the foods closest to a target profile by Euclidean
//! distance.

use serde::Serialize;
use tracing::debug;

use crate::models::{FoodItem, NutrientQuantity};

/// A recommended food and its distance from the target profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodRecommendation {
    pub id: u32,
    pub name: String,
    pub kcal_100g: f64,
    pub protein_100g: f64,
    pub fat_100g: f64,
    pub carb_100g: f64,
    pub distance: f64,
}

impl FoodRecommendation {
    fn new(food: &FoodItem, distance: f64) -> Self {
        Self {
            id: food.id,
            name: food.name.clone(),
            kcal_100g: food.kcal_100g,
            protein_100g: food.protein_100g,
            fat_100g: food.fat_100g,
            carb_100g: food.carb_100g,
            distance,
        }
    }
}

/// Return the `k` foods closest to `target`, nearest first.
///
/// `k` is clamped to `[1, foods.len()]`. Equal distances keep catalog order.
/// An empty catalog yields an empty result.
pub fn recommend_foods(
    foods: &[FoodItem],
    target: &NutrientQuantity,
    k: usize,
) -> Vec<FoodRecommendation> {
    if foods.is_empty() {
        return Vec::new();
    }

    let k = k.clamp(1, foods.len());

    let mut scored: Vec<(&FoodItem, f64)> = foods
        .iter()
        .map(|food| (food, food.per_100g().distance(target)))
        .collect();

    // Stable sort keeps insertion order among ties.
    scored.sort_by(|a, b| a.1.total_cmp(&b.1));
    scored.truncate(k);

    debug!(k, catalog = foods.len(), "computed food recommendations");

    scored
        .into_iter()
        .map(|(food, distance)| FoodRecommendation::new(food, distance))
        .collect()
}
