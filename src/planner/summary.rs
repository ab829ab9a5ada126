use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use crate::error::{NutriError, Result};
use crate::models::{round_to, FoodItem, MealEntry, NutrientQuantity, UserProfile};
use crate::planner::constants::SUMMARY_DECIMALS;
use crate::planner::energy::{CalorieReport, CalorieTargets};
use crate::planner::scaling::scale_food;

/// Nutrition of a single logged meal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealSummary {
    pub meal_id: u32,
    pub user_id: u32,
    pub food_id: u32,
    pub grams: f64,
    pub nutrition: NutrientQuantity,
}

/// One line of a daily summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyMeal {
    pub meal_id: u32,
    pub food_name: String,
    pub grams: f64,
    pub nutrition: NutrientQuantity,
}

/// Calorie targets next to everything a user has logged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub user_id: u32,
    pub calories: CalorieReport,
    pub total_meal_calories: f64,
    pub meals: Vec<DailyMeal>,
}

impl DailySummary {
    /// Recommended calories left after the logged meals (negative when over).
    pub fn remaining_calories(&self) -> f64 {
        round_to(
            self.calories.recommended_calories as f64 - self.total_meal_calories,
            SUMMARY_DECIMALS,
        )
    }
}

/// Summarize one logged meal.
pub fn meal_summary(entry: &MealEntry, food: &FoodItem) -> Result<MealSummary> {
    if entry.food_id != food.id {
        return Err(NutriError::InvalidInput(format!(
            "meal {} references food {}, got food {}",
            entry.id, entry.food_id, food.id
        )));
    }

    Ok(MealSummary {
        meal_id: entry.id,
        user_id: entry.user_id,
        food_id: entry.food_id,
        grams: entry.grams,
        nutrition: scale_food(food, entry.grams).rounded(SUMMARY_DECIMALS),
    })
}

/// Summarize a user's calorie targets and logged meals.
///
/// Meals whose food is missing from `foods` are skipped.
pub fn daily_summary(
    user: &UserProfile,
    meals: &[&MealEntry],
    foods: &[FoodItem],
) -> DailySummary {
    let by_id: HashMap<u32, &FoodItem> = foods.iter().map(|f| (f.id, f)).collect();

    let mut total_kcal = 0.0;
    let mut daily_meals = Vec::with_capacity(meals.len());

    for meal in meals {
        let Some(food) = by_id.get(&meal.food_id) else {
            warn!(meal_id = meal.id, food_id = meal.food_id, "skipping meal with unknown food");
            continue;
        };

        let nutrition = scale_food(food, meal.grams);
        total_kcal += nutrition.kcal;

        daily_meals.push(DailyMeal {
            meal_id: meal.id,
            food_name: food.name.clone(),
            grams: meal.grams,
            nutrition: nutrition.rounded(SUMMARY_DECIMALS),
        });
    }

    DailySummary {
        user_id: user.id,
        calories: CalorieTargets::for_profile(user).rounded(),
        total_meal_calories: round_to(total_kcal, SUMMARY_DECIMALS),
        meals: daily_meals,
    }
}
