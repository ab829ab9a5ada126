use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{ActivityLevel, Goal, MealType, Sex};
use crate::planner::constants::{BREAKFAST_SHARE, DEFAULT_NEIGHBORS, DINNER_SHARE, LUNCH_SHARE};

/// nutri: calorie targets, meal logging, meal plans and food recommendations.
#[derive(Parser, Debug)]
#[command(name = "nutri")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the JSON store.
    #[arg(short, long, env = "NUTRI_STORE", default_value = "nutri_store.json")]
    pub store: PathBuf,

    /// Seed for reproducible meal plans.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print reports as JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a user; missing fields are prompted for.
    AddUser {
        #[arg(long)]
        name: Option<String>,

        /// "m" or "f".
        #[arg(long, value_parser = parse_sex)]
        sex: Option<Sex>,

        #[arg(long)]
        age: Option<u32>,

        #[arg(long)]
        weight: Option<f64>,

        #[arg(long)]
        height: Option<f64>,

        /// deloc, usor, moderat or intens.
        #[arg(long, value_parser = parse_activity)]
        activity: Option<ActivityLevel>,

        /// slabit, masa or mentinere.
        #[arg(long, value_parser = parse_goal)]
        goal: Option<Goal>,
    },

    /// List registered users.
    Users,

    /// Look a user up by name.
    Login { name: String },

    /// Add a food to the catalog (values per 100g).
    AddFood {
        #[arg(long)]
        name: String,

        #[arg(long)]
        kcal: f64,

        #[arg(long)]
        protein: f64,

        #[arg(long)]
        fat: f64,

        #[arg(long)]
        carb: f64,

        /// breakfast, lunch or dinner.
        #[arg(long, value_parser = parse_meal_type, default_value = "lunch")]
        meal_type: MealType,
    },

    /// Import foods from a CSV file.
    ImportFoods { path: PathBuf },

    /// List the food catalog.
    Foods {
        #[arg(long, value_parser = parse_meal_type)]
        meal_type: Option<MealType>,
    },

    /// Log a meal.
    LogMeal {
        #[arg(long)]
        user: u32,

        /// Food name; close spellings are suggested.
        #[arg(long)]
        food: String,

        #[arg(long)]
        grams: f64,
    },

    /// Show the nutrition of one logged meal.
    MealSummary { meal_id: u32 },

    /// Show BMR, TDEE and recommended calories.
    Calories { user_id: u32 },

    /// Show calorie targets next to logged meals.
    Summary { user_id: u32 },

    /// Generate a breakfast/lunch/dinner plan.
    Plan {
        user_id: u32,

        #[arg(long, default_value_t = BREAKFAST_SHARE)]
        breakfast_share: f64,

        #[arg(long, default_value_t = LUNCH_SHARE)]
        lunch_share: f64,

        #[arg(long, default_value_t = DINNER_SHARE)]
        dinner_share: f64,
    },

    /// Find the foods closest to a per-100g nutrient profile.
    Recommend {
        #[arg(long)]
        kcal: f64,

        #[arg(long)]
        protein: f64,

        #[arg(long)]
        fat: f64,

        #[arg(long)]
        carb: f64,

        #[arg(short, long, default_value_t = DEFAULT_NEIGHBORS)]
        k: usize,
    },
}

fn parse_sex(s: &str) -> Result<Sex, String> {
    Ok(Sex::from_label(s))
}

fn parse_activity(s: &str) -> Result<ActivityLevel, String> {
    Ok(ActivityLevel::from_label(s))
}

fn parse_goal(s: &str) -> Result<Goal, String> {
    Ok(Goal::from_label(s))
}

fn parse_meal_type(s: &str) -> Result<MealType, String> {
    MealType::parse_label(s)
        .ok_or_else(|| format!("unknown meal type '{}': use breakfast, lunch or dinner", s))
}
