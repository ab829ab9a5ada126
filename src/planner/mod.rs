pub mod constants;
pub mod energy;
pub mod recommender;
pub mod scaling;
pub mod selection;
pub mod summary;

pub use constants::*;
pub use energy::{
    activity_multiplier, adjust_goal, basal_metabolic_rate, recommended_calories, CalorieReport,
    CalorieTargets,
};
pub use recommender::{recommend_foods, FoodRecommendation};
pub use scaling::{scale_food, scale_nutrition};
pub use selection::{
    generate_meal_plan, grams_for_target, is_feasible_portion, pick_food_for_meal, MealSlot,
    PlanConfig,
};
pub use summary::{daily_summary, meal_summary, DailyMeal, DailySummary, MealSummary};
