use serde::Serialize;

use crate::models::{ActivityLevel, Goal, Sex, UserProfile};
use crate::planner::constants::*;

/// Basal metabolic rate (kcal/day) using Mifflin-St Jeor.
///
/// Inputs are not bounds-checked; implausible values can produce a negative rate.
pub fn basal_metabolic_rate(sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let base =
        BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm - BMR_AGE_COEF * age as f64;
    match sex {
        Sex::Male => base + BMR_MALE_OFFSET,
        Sex::Female => base + BMR_FEMALE_OFFSET,
    }
}

/// TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    ACTIVITY_MULTIPLIERS
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, m)| *m)
        .unwrap_or(ACTIVITY_MULTIPLIERS[0].1)
}

/// Shift TDEE toward the user's goal.
pub fn adjust_goal(tdee: f64, goal: Goal) -> f64 {
    let delta = GOAL_DELTAS
        .iter()
        .find(|(g, _)| *g == goal)
        .map(|(_, d)| *d)
        .unwrap_or(0.0);
    tdee + delta
}

/// Daily calorie figures derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieTargets {
    pub bmr: f64,
    pub tdee: f64,
    pub recommended: f64,
}

/// Calorie figures rounded to whole kcal for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalorieReport {
    pub bmr: i64,
    pub tdee: i64,
    pub recommended_calories: i64,
}

impl CalorieTargets {
    pub fn compute(
        sex: Sex,
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        activity: ActivityLevel,
        goal: Goal,
    ) -> Self {
        let bmr = basal_metabolic_rate(sex, weight_kg, height_cm, age);
        let tdee = bmr * activity_multiplier(activity);
        let recommended = adjust_goal(tdee, goal);
        Self {
            bmr,
            tdee,
            recommended,
        }
    }

    pub fn for_profile(user: &UserProfile) -> Self {
        Self::compute(
            user.sex,
            user.weight_kg,
            user.height_cm,
            user.age,
            user.activity,
            user.goal,
        )
    }

    /// Whole-kcal figures; exact halves round to even.
    pub fn rounded(&self) -> CalorieReport {
        CalorieReport {
            bmr: self.bmr.round_ties_even() as i64,
            tdee: self.tdee.round_ties_even() as i64,
            recommended_calories: self.recommended.round_ties_even() as i64,
        }
    }
}

/// Recommended daily calories for a profile.
pub fn recommended_calories(user: &UserProfile) -> f64 {
    CalorieTargets::for_profile(user).recommended
}
