use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use nutri_planner::cli::{Cli, Command};
use nutri_planner::error::{NutriError, Result};
use nutri_planner::interface::{
    display_calories, display_daily_summary, display_food_list, display_meal_plan,
    display_meal_summary, display_recommendations, display_user_list, print_json,
    prompt_food_match, UserDraft,
};
use nutri_planner::models::{MealType, NewFood, NewMeal, NutrientQuantity};
use nutri_planner::planner::{
    daily_summary, generate_meal_plan, meal_summary, recommend_foods, CalorieTargets, PlanConfig,
    MAX_NEIGHBORS,
};
use nutri_planner::state::{import_foods_csv, load_or_default, save_store, NutriStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = cli.store.as_path();
    let mut store = load_or_default(path)?;

    match cli.command {
        Command::AddUser {
            name,
            sex,
            age,
            weight,
            height,
            activity,
            goal,
        } => {
            let draft = UserDraft {
                name,
                sex,
                age,
                weight_kg: weight,
                height_cm: height,
                activity,
                goal,
            };
            if !draft.is_complete() {
                println!("Some profile fields are missing; asking for them.");
            }
            let user = store.add_user(draft.complete()?)?;
            println!("Added user #{} ({})", user.id, user.name);
            save(path, &store)
        }
        Command::Users => {
            display_user_list(store.users());
            Ok(())
        }
        Command::Login { name } => {
            let user = store.user_by_name(&name)?;
            println!("Logged in as #{} ({})", user.id, user.name);
            Ok(())
        }
        Command::AddFood {
            name,
            kcal,
            protein,
            fat,
            carb,
            meal_type,
        } => {
            let food = store.add_food(NewFood {
                name,
                kcal_100g: kcal,
                protein_100g: protein,
                fat_100g: fat,
                carb_100g: carb,
                meal_type,
            })?;
            println!("Added food #{} ({})", food.id, food.name);
            save(path, &store)
        }
        Command::ImportFoods { path: csv_path } => cmd_import_foods(path, &mut store, &csv_path),
        Command::Foods { meal_type } => {
            cmd_foods(&store, meal_type);
            Ok(())
        }
        Command::LogMeal { user, food, grams } => {
            cmd_log_meal(path, &mut store, user, &food, grams)
        }
        Command::MealSummary { meal_id } => {
            let meal = store.meal(meal_id)?;
            let food = store.food(meal.food_id)?;
            let summary = meal_summary(meal, food)?;
            if cli.json {
                return print_json(&summary);
            }
            display_meal_summary(&summary, &food.name);
            Ok(())
        }
        Command::Calories { user_id } => {
            let user = store.user(user_id)?;
            let report = CalorieTargets::for_profile(user).rounded();
            if cli.json {
                return print_json(&report);
            }
            display_calories(user, &report);
            Ok(())
        }
        Command::Summary { user_id } => {
            let user = store.user(user_id)?;
            let meals = store.meals_for_user(user_id);
            let summary = daily_summary(user, &meals, store.foods());
            if cli.json {
                return print_json(&summary);
            }
            display_daily_summary(user, &summary);
            Ok(())
        }
        Command::Plan {
            user_id,
            breakfast_share,
            lunch_share,
            dinner_share,
        } => {
            let shares = [breakfast_share, lunch_share, dinner_share];
            if shares.iter().any(|s| !(*s >= 0.0)) {
                return Err(NutriError::InvalidInput(
                    "meal shares must be non-negative".to_string(),
                ));
            }

            let user = store.user(user_id)?;
            let config = PlanConfig::with_shares(breakfast_share, lunch_share, dinner_share);
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let plan = generate_meal_plan(user, store.foods(), &config, &mut rng)?;
            if cli.json {
                return print_json(&plan);
            }
            display_meal_plan(&plan);
            Ok(())
        }
        Command::Recommend {
            kcal,
            protein,
            fat,
            carb,
            k,
        } => {
            if !(kcal > 0.0) || !(protein >= 0.0) || !(fat >= 0.0) || !(carb >= 0.0) {
                return Err(NutriError::InvalidInput(
                    "kcal must be positive and macros non-negative".to_string(),
                ));
            }
            if !(1..=MAX_NEIGHBORS).contains(&k) {
                return Err(NutriError::InvalidInput(format!(
                    "k must be between 1 and {}",
                    MAX_NEIGHBORS
                )));
            }
            if store.foods().is_empty() {
                return Err(NutriError::InvalidInput("no foods in catalog".to_string()));
            }

            let target = NutrientQuantity::new(kcal, protein, fat, carb);
            let recs = recommend_foods(store.foods(), &target, k);
            if cli.json {
                return print_json(&recs);
            }
            display_recommendations(&recs);
            Ok(())
        }
    }
}

fn save(path: &Path, store: &NutriStore) -> Result<()> {
    save_store(path, store)?;
    println!("Store saved.");
    Ok(())
}

/// Import foods from CSV, skipping rows that fail validation.
fn cmd_import_foods(path: &Path, store: &mut NutriStore, csv_path: &Path) -> Result<()> {
    let rows = import_foods_csv(csv_path)?;
    let total = rows.len();
    let mut imported = 0;

    for row in rows {
        match store.add_food(row) {
            Ok(_) => imported += 1,
            Err(e) => eprintln!("Skipped: {}", e),
        }
    }

    println!("Imported {} of {} foods.", imported, total);
    if imported > 0 {
        save(path, store)?;
    }
    Ok(())
}

fn cmd_foods(store: &NutriStore, meal_type: Option<MealType>) {
    match meal_type {
        Some(meal_type) => {
            let foods = store.foods_of_type(meal_type);
            display_food_list(&foods, &format!("Foods for {}", meal_type));
        }
        None => {
            let foods: Vec<_> = store.foods().iter().collect();
            display_food_list(&foods, "Foods");
        }
    }
}

/// Log a meal, resolving the food name with fuzzy suggestions.
fn cmd_log_meal(
    path: &Path,
    store: &mut NutriStore,
    user_id: u32,
    food_name: &str,
    grams: f64,
) -> Result<()> {
    let food_id = match prompt_food_match(store.foods(), food_name)? {
        Some(food) => food.id,
        None => return Err(NutriError::FoodNotFound(food_name.to_string())),
    };

    let meal = store.log_meal(NewMeal {
        user_id,
        food_id,
        grams,
    })?;
    let meal_id = meal.id;

    let summary = meal_summary(store.meal(meal_id)?, store.food(food_id)?)?;
    display_meal_summary(&summary, &store.food(food_id)?.name);
    save(path, store)
}
