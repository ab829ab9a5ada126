use serde::{Deserialize, Serialize};

use crate::models::labels::MealType;
use crate::models::nutrients::NutrientQuantity;

/// Represents one meal slot of a generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanItem {
    /// Display name of the slot ("Breakfast", "Lunch", ...).
    pub meal_name: String,

    /// Category the food was drawn from.
    pub meal_type: MealType,

    pub food_id: u32,

    pub food_name: String,

    /// Portion size in grams.
    pub grams: f64,

    /// Nutrition delivered by the portion.
    pub nutrition: NutrientQuantity,
}

impl MealPlanItem {
    pub fn new(
        meal_name: String,
        meal_type: MealType,
        food_id: u32,
        food_name: String,
        grams: f64,
        nutrition: NutrientQuantity,
    ) -> Self {
        Self {
            meal_name,
            meal_type,
            food_id,
            food_name,
            grams,
            nutrition,
        }
    }
}

/// A day's meal plan in slot order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub user_id: u32,
    pub recommended_calories: f64,
    pub meals: Vec<MealPlanItem>,
}

impl MealPlan {
    /// Sum of nutrition across all planned meals.
    pub fn total(&self) -> NutrientQuantity {
        self.meals
            .iter()
            .fold(NutrientQuantity::default(), |acc, item| acc + item.nutrition)
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
