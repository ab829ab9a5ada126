use crate::models::{ActivityLevel, Goal};

// ─────────────────────────────────────────────────────────────────────────────
// Energy model (Mifflin-St Jeor)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;

/// Constant term for the male branch.
pub const BMR_MALE_OFFSET: f64 = 5.0;

/// Constant term for every other sex label.
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Calories removed from TDEE when losing weight.
pub const LOSE_WEIGHT_DELTA: f64 = -400.0;

/// Calories added to TDEE when gaining mass.
pub const GAIN_MASS_DELTA: f64 = 300.0;

/// Map from activity level to TDEE multiplier.
pub const ACTIVITY_MULTIPLIERS: [(ActivityLevel, f64); 4] = [
    (ActivityLevel::Sedentary, 1.2),
    (ActivityLevel::Light, 1.375),
    (ActivityLevel::Moderate, 1.55),
    (ActivityLevel::Intense, 1.725),
];

/// Map from goal to calorie adjustment.
pub const GOAL_DELTAS: [(Goal, f64); 3] = [
    (Goal::Lose, LOSE_WEIGHT_DELTA),
    (Goal::Gain, GAIN_MASS_DELTA),
    (Goal::Maintain, 0.0),
];

// ─────────────────────────────────────────────────────────────────────────────
// Meal-plan selection
// ─────────────────────────────────────────────────────────────────────────────

/// Smallest portion accepted without fallback.
pub const MIN_PORTION_GRAMS: f64 = 100.0;

/// Largest portion accepted without fallback.
pub const MAX_PORTION_GRAMS: f64 = 200.0;

/// Portion used when a fallback food has no usable kcal value.
pub const DEFAULT_PORTION_GRAMS: f64 = 100.0;

/// Default share of daily calories per slot.
pub const BREAKFAST_SHARE: f64 = 0.30;
pub const LUNCH_SHARE: f64 = 0.40;
pub const DINNER_SHARE: f64 = 0.30;

// ─────────────────────────────────────────────────────────────────────────────
// Recommender
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_NEIGHBORS: usize = 5;

/// Upper bound on neighbors a caller may request.
pub const MAX_NEIGHBORS: usize = 50;

// ─────────────────────────────────────────────────────────────────────────────
// Display precision
// ─────────────────────────────────────────────────────────────────────────────

/// Decimals for meal and daily summaries.
pub const SUMMARY_DECIMALS: u32 = 2;

/// Decimals for meal-plan items.
pub const PLAN_DECIMALS: u32 = 1;
