mod food;
mod labels;
mod meal;
mod nutrients;
mod plan;
mod user;

pub use food::{FoodItem, NewFood};
pub use labels::{ActivityLevel, Goal, MealType, Sex};
pub use meal::{MealEntry, NewMeal};
pub use nutrients::{round_to, NutrientQuantity};
pub use plan::{MealPlan, MealPlanItem};
pub use user::{NewUser, UserProfile};
