use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{NutriError, Result};
use crate::models::{round_to, FoodItem, MealPlan, MealPlanItem, MealType, UserProfile};
use crate::planner::constants::*;
use crate::planner::energy::recommended_calories;
use crate::planner::scaling::scale_food;

/// One slot of the daily plan and its share of the calorie target.
#[derive(Debug, Clone, PartialEq)]
pub struct MealSlot {
    pub name: String,
    pub meal_type: MealType,
    pub share: f64,
}

impl MealSlot {
    pub fn new(name: &str, meal_type: MealType, share: f64) -> Self {
        Self {
            name: name.to_string(),
            meal_type,
            share,
        }
    }
}

/// Slot layout used by plan generation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanConfig {
    pub slots: Vec<MealSlot>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self::with_shares(BREAKFAST_SHARE, LUNCH_SHARE, DINNER_SHARE)
    }
}

impl PlanConfig {
    /// Breakfast, lunch and dinner with custom calorie shares.
    pub fn with_shares(breakfast: f64, lunch: f64, dinner: f64) -> Self {
        Self {
            slots: vec![
                MealSlot::new("Breakfast", MealType::Breakfast, breakfast),
                MealSlot::new("Lunch", MealType::Lunch, lunch),
                MealSlot::new("Dinner", MealType::Dinner, dinner),
            ],
        }
    }
}

/// Grams of `food` needed to reach `target_kcal`.
pub fn grams_for_target(food: &FoodItem, target_kcal: f64) -> Result<f64> {
    if !food.has_positive_kcal() {
        return Err(NutriError::InvalidDivisor(food.name.clone()));
    }
    Ok((target_kcal / food.kcal_100g) * 100.0)
}

/// Whether a portion falls inside the accepted gram band.
#[inline]
pub fn is_feasible_portion(grams: f64) -> bool {
    (MIN_PORTION_GRAMS..=MAX_PORTION_GRAMS).contains(&grams)
}

/// Pick one food and a portion that delivers roughly `target_kcal`.
///
/// Picks uniformly among foods whose portion lands in the gram band. When
/// none does, picks any food at random and clamps its portion into the band.
/// Returns `None` only for an empty pool.
pub fn pick_food_for_meal<'a, R: Rng + ?Sized>(
    pool: &[&'a FoodItem],
    target_kcal: f64,
    rng: &mut R,
) -> Option<(&'a FoodItem, f64)> {
    let feasible: Vec<(&'a FoodItem, f64)> = pool
        .iter()
        .filter_map(|food| {
            let grams = grams_for_target(food, target_kcal).ok()?;
            is_feasible_portion(grams).then_some((*food, grams))
        })
        .collect();

    if let Some(&(food, grams)) = feasible.choose(rng) {
        debug!(
            food = %food.name,
            grams,
            candidates = feasible.len(),
            "picked feasible portion"
        );
        return Some((food, grams));
    }

    let food = *pool.choose(rng)?;
    let grams = grams_for_target(food, target_kcal)
        .unwrap_or(DEFAULT_PORTION_GRAMS)
        .clamp(MIN_PORTION_GRAMS, MAX_PORTION_GRAMS);
    debug!(food = %food.name, grams, "no feasible portion, clamped fallback");

    Some((food, grams))
}

/// Generate a daily meal plan for a user.
///
/// Each slot draws from the foods of its meal type; a slot with no
/// candidates fails the whole plan.
pub fn generate_meal_plan<R: Rng + ?Sized>(
    user: &UserProfile,
    foods: &[FoodItem],
    config: &PlanConfig,
    rng: &mut R,
) -> Result<MealPlan> {
    let recommended = recommended_calories(user);
    let mut meals = Vec::with_capacity(config.slots.len());

    for slot in &config.slots {
        let target_kcal = recommended * slot.share;
        let pool: Vec<&FoodItem> = foods
            .iter()
            .filter(|f| f.meal_type == slot.meal_type)
            .collect();

        let (food, grams) = pick_food_for_meal(&pool, target_kcal, rng)
            .ok_or(NutriError::EmptyCandidatePool(slot.meal_type))?;

        let nutrition = scale_food(food, grams).rounded(PLAN_DECIMALS);

        meals.push(MealPlanItem::new(
            slot.name.clone(),
            slot.meal_type,
            food.id,
            food.name.clone(),
            round_to(grams, PLAN_DECIMALS),
            nutrition,
        ));
    }

    Ok(MealPlan {
        user_id: user.id,
        recommended_calories: round_to(recommended, PLAN_DECIMALS),
        meals,
    })
}
