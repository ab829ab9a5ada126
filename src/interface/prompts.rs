use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{NutriError, Result};
use crate::models::{ActivityLevel, FoodItem, Goal, NewUser, Sex};

/// Minimum Jaro-Winkler similarity for a fuzzy food match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy candidates offered at once.
const MAX_SUGGESTIONS: usize = 5;

/// User fields gathered from flags; anything missing is prompted for.
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub name: Option<String>,
    pub sex: Option<Sex>,
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub activity: Option<ActivityLevel>,
    pub goal: Option<Goal>,
}

impl UserDraft {
    /// Fill the missing fields interactively.
    pub fn complete(self) -> Result<NewUser> {
        let name = match self.name {
            Some(name) => name,
            None => prompt_text("Name")?,
        };
        let sex = match self.sex {
            Some(sex) => sex,
            None => prompt_sex()?,
        };
        let age = match self.age {
            Some(age) => age,
            None => prompt_number("Age (years)", "30")?,
        };
        let weight_kg = match self.weight_kg {
            Some(w) => w,
            None => prompt_number("Weight (kg)", "70")?,
        };
        let height_cm = match self.height_cm {
            Some(h) => h,
            None => prompt_number("Height (cm)", "170")?,
        };
        let activity = match self.activity {
            Some(a) => a,
            None => prompt_activity()?,
        };
        let goal = match self.goal {
            Some(g) => g,
            None => prompt_goal()?,
        };

        Ok(NewUser {
            name,
            sex,
            age,
            weight_kg,
            height_cm,
            activity,
            goal,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.name.is_some()
            && self.sex.is_some()
            && self.age.is_some()
            && self.weight_kg.is_some()
            && self.height_cm.is_some()
            && self.activity.is_some()
            && self.goal.is_some()
    }
}

fn prompt_text(prompt: &str) -> Result<String> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(input.trim().to_string())
}

fn prompt_number<T: FromStr>(prompt: &str, default: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput(format!("Invalid number: {}", input)))
}

fn prompt_sex() -> Result<Sex> {
    let options = ["m (male)", "f (female)"];
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(if selection == 0 { Sex::Male } else { Sex::Female })
}

fn prompt_activity() -> Result<ActivityLevel> {
    let levels = ActivityLevel::all();
    let options: Vec<&str> = levels.iter().map(|l| l.label()).collect();
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(levels[selection])
}

fn prompt_goal() -> Result<Goal> {
    let goals = Goal::all();
    let options: Vec<&str> = goals.iter().map(|g| g.label()).collect();
    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(2)
        .interact()?;

    Ok(goals[selection])
}

/// Foods whose names resemble `input`, best match first.
pub fn fuzzy_food_matches<'a>(foods: &'a [FoodItem], input: &str) -> Vec<&'a FoodItem> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(&FoodItem, f64)> = foods
        .iter()
        .map(|f| (f, jaro_winkler(&f.key(), &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(f, _)| f)
        .collect()
}

/// Resolve a typed food name, asking the user when only fuzzy matches exist.
pub fn prompt_food_match<'a>(foods: &'a [FoodItem], input: &str) -> Result<Option<&'a FoodItem>> {
    let key = input.trim().to_lowercase();
    if let Some(food) = foods.iter().find(|f| f.key() == key) {
        return Ok(Some(food));
    }

    let candidates = fuzzy_food_matches(foods, input);

    match candidates.as_slice() {
        [] => {
            println!("No matching food found for '{}'", input);
            Ok(None)
        }
        [food] => {
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", food.name), true)?;
            Ok(confirm.then_some(*food))
        }
        _ => {
            let mut options: Vec<String> = candidates.iter().map(|f| f.name.clone()).collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok(candidates.get(selection).copied())
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;

    fn food(id: u32, name: &str) -> FoodItem {
        FoodItem {
            id,
            name: name.to_string(),
            kcal_100g: 100.0,
            protein_100g: 1.0,
            fat_100g: 1.0,
            carb_100g: 1.0,
            meal_type: MealType::Lunch,
        }
    }

    #[test]
    fn test_fuzzy_food_matches() {
        let foods = vec![food(1, "Chicken Breast"), food(2, "Rice"), food(3, "Chickpeas")];
        let matches = fuzzy_food_matches(&foods, "chiken breast");
        assert!(!matches.is_empty());
        assert_eq!(matches[0].id, 1);

        assert!(fuzzy_food_matches(&foods, "zzzzzz").is_empty());
    }

    #[test]
    fn test_complete_draft_needs_no_prompts() {
        let draft = UserDraft {
            name: Some("Ana".to_string()),
            sex: Some(Sex::Female),
            age: Some(30),
            weight_kg: Some(60.0),
            height_cm: Some(165.0),
            activity: Some(ActivityLevel::Light),
            goal: Some(Goal::Lose),
        };
        assert!(draft.is_complete());
        let user = draft.complete().unwrap();
        assert_eq!(user.name, "Ana");
        assert_eq!(user.goal, Goal::Lose);
    }
}
