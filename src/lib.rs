pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{NutriError, Result};
pub use models::{FoodItem, MealPlan, MealPlanItem, NutrientQuantity, UserProfile};
