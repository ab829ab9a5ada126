pub mod prompts;
pub mod render;

pub use prompts::{fuzzy_food_matches, prompt_food_match, prompt_yes_no, UserDraft};
pub use render::{
    display_calories, display_daily_summary, display_food_list, display_meal_plan,
    display_meal_summary, display_recommendations, display_user_list, print_json, to_json,
};
