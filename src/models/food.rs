use serde::{Deserialize, Serialize};

use crate::models::labels::MealType;
use crate::models::nutrients::NutrientQuantity;

/// Food fields as submitted by a caller, before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub kcal_100g: f64,
    pub protein_100g: f64,
    pub fat_100g: f64,
    pub carb_100g: f64,
    #[serde(default)]
    pub meal_type: MealType,
}

/// A catalog food with its per-100g nutrient profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: u32,
    pub name: String,
    pub kcal_100g: f64,
    pub protein_100g: f64,
    pub fat_100g: f64,
    pub carb_100g: f64,
    #[serde(default)]
    pub meal_type: MealType,
}

impl FoodItem {
    pub fn from_new(id: u32, new: NewFood) -> Self {
        let NewFood {
            name,
            kcal_100g,
            protein_100g,
            fat_100g,
            carb_100g,
            meal_type,
        } = new;

        Self {
            id,
            name,
            kcal_100g,
            protein_100g,
            fat_100g,
            carb_100g,
            meal_type,
        }
    }

    /// Per-100g profile as a nutrient quantity.
    pub fn per_100g(&self) -> NutrientQuantity {
        NutrientQuantity::new(
            self.kcal_100g,
            self.protein_100g,
            self.fat_100g,
            self.carb_100g,
        )
    }

    /// Whether this food can be used as a divisor in portion sizing.
    #[inline]
    pub fn has_positive_kcal(&self) -> bool {
        self.kcal_100g > 0.0
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

impl NewFood {
    /// Non-empty name and non-negative nutrient values.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.kcal_100g >= 0.0
            && self.protein_100g >= 0.0
            && self.fat_100g >= 0.0
            && self.carb_100g >= 0.0
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FoodItem {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new_food() -> NewFood {
        NewFood {
            name: "Oatmeal".to_string(),
            kcal_100g: 370.0,
            protein_100g: 13.0,
            fat_100g: 7.0,
            carb_100g: 60.0,
            meal_type: MealType::Breakfast,
        }
    }

    #[test]
    fn test_from_new_maps_every_field() {
        let food = FoodItem::from_new(7, sample_new_food());
        assert_eq!(food.id, 7);
        assert_eq!(food.name, "Oatmeal");
        assert_eq!(food.kcal_100g, 370.0);
        assert_eq!(food.protein_100g, 13.0);
        assert_eq!(food.fat_100g, 7.0);
        assert_eq!(food.carb_100g, 60.0);
        assert_eq!(food.meal_type, MealType::Breakfast);
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_new_food().is_valid());

        let mut negative = sample_new_food();
        negative.fat_100g = -1.0;
        assert!(!negative.is_valid());

        let mut blank = sample_new_food();
        blank.name = "   ".to_string();
        assert!(!blank.is_valid());
    }

    #[test]
    fn test_missing_meal_type_defaults_to_lunch() {
        let json = r#"{"id": 1, "name": "Soup", "kcal_100g": 40, "protein_100g": 2, "fat_100g": 1, "carb_100g": 5}"#;
        let food: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(food.meal_type, MealType::Lunch);
    }
}
