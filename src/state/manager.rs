use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{NutriError, Result};
use crate::models::{FoodItem, MealEntry, MealType, NewFood, NewMeal, NewUser, UserProfile};

/// In-memory catalog of users, foods and logged meals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutriStore {
    #[serde(default)]
    users: Vec<UserProfile>,
    #[serde(default)]
    foods: Vec<FoodItem>,
    #[serde(default)]
    meals: Vec<MealEntry>,
}

/// Next id after the largest one in use.
fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().map_or(1, |max| max + 1)
}

impl NutriStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user after validating its attributes.
    pub fn add_user(&mut self, new: NewUser) -> Result<&UserProfile> {
        if !new.is_valid() {
            return Err(NutriError::InvalidInput(
                "user needs a name and positive age, weight and height".to_string(),
            ));
        }

        let id = next_id(self.users.iter().map(|u| u.id));
        debug!(id, name = %new.name, "adding user");
        self.users.push(UserProfile::from_new(id, new));
        Ok(&self.users[self.users.len() - 1])
    }

    /// Add a food to the catalog. Names are unique, ignoring case.
    pub fn add_food(&mut self, new: NewFood) -> Result<&FoodItem> {
        if !new.is_valid() {
            return Err(NutriError::InvalidInput(format!(
                "food '{}' needs a name and non-negative nutrient values",
                new.name
            )));
        }
        if self.food_by_name(&new.name).is_some() {
            return Err(NutriError::DuplicateFood(new.name));
        }

        let id = next_id(self.foods.iter().map(|f| f.id));
        debug!(id, name = %new.name, "adding food");
        self.foods.push(FoodItem::from_new(id, new));
        Ok(&self.foods[self.foods.len() - 1])
    }

    /// Log a meal for an existing user and food.
    pub fn log_meal(&mut self, new: NewMeal) -> Result<&MealEntry> {
        if !(new.grams > 0.0) {
            return Err(NutriError::InvalidInput("grams must be positive".to_string()));
        }
        self.user(new.user_id)?;
        self.food(new.food_id)?;

        let id = next_id(self.meals.iter().map(|m| m.id));
        debug!(id, user_id = new.user_id, food_id = new.food_id, "logging meal");
        self.meals.push(MealEntry::from_new(id, new));
        Ok(&self.meals[self.meals.len() - 1])
    }

    pub fn user(&self, id: u32) -> Result<&UserProfile> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or(NutriError::UserNotFound(id))
    }

    /// Find a user by exact name (surrounding whitespace ignored).
    pub fn user_by_name(&self, name: &str) -> Result<&UserProfile> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NutriError::InvalidInput("name is required".to_string()));
        }
        self.users
            .iter()
            .find(|u| u.name == name)
            .ok_or_else(|| NutriError::UserNameNotFound(name.to_string()))
    }

    pub fn food(&self, id: u32) -> Result<&FoodItem> {
        self.foods
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| NutriError::FoodNotFound(id.to_string()))
    }

    /// Get a food by name (case-insensitive).
    pub fn food_by_name(&self, name: &str) -> Option<&FoodItem> {
        let key = name.trim().to_lowercase();
        self.foods.iter().find(|f| f.key() == key)
    }

    pub fn meal(&self, id: u32) -> Result<&MealEntry> {
        self.meals
            .iter()
            .find(|m| m.id == id)
            .ok_or(NutriError::MealNotFound(id))
    }

    /// All meals logged by a user, in logging order.
    pub fn meals_for_user(&self, user_id: u32) -> Vec<&MealEntry> {
        self.meals.iter().filter(|m| m.user_id == user_id).collect()
    }

    pub fn foods_of_type(&self, meal_type: MealType) -> Vec<&FoodItem> {
        self.foods
            .iter()
            .filter(|f| f.meal_type == meal_type)
            .collect()
    }

    pub fn users(&self) -> &[UserProfile] {
        &self.users
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn meals(&self) -> &[MealEntry] {
        &self.meals
    }

    /// Drop duplicate food names, keeping the last occurrence.
    ///
    /// Meals logged against a dropped food are moved to the kept one.
    pub(crate) fn dedup_foods(&mut self) {
        let mut kept: Vec<FoodItem> = Vec::with_capacity(self.foods.len());
        let mut dropped: HashMap<u32, String> = HashMap::new();
        for food in self.foods.drain(..) {
            kept.retain(|f| {
                if f.key() == food.key() {
                    dropped.insert(f.id, f.key());
                    false
                } else {
                    true
                }
            });
            kept.push(food);
        }

        for meal in &mut self.meals {
            let Some(key) = dropped.get(&meal.food_id) else {
                continue;
            };
            if let Some(target) = kept.iter().find(|f| &f.key() == key) {
                warn!(
                    meal = meal.id,
                    from = meal.food_id,
                    to = target.id,
                    "moving meal to deduplicated food"
                );
                meal.food_id = target.id;
            }
        }
        self.foods = kept;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Goal, Sex};

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            sex: Sex::Male,
            age: 35,
            weight_kg: 82.0,
            height_cm: 178.0,
            activity: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        }
    }

    fn new_food(name: &str, meal_type: MealType) -> NewFood {
        NewFood {
            name: name.to_string(),
            kcal_100g: 150.0,
            protein_100g: 10.0,
            fat_100g: 5.0,
            carb_100g: 15.0,
            meal_type,
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut store = NutriStore::new();
        assert_eq!(store.add_user(new_user("Ana")).unwrap().id, 1);
        assert_eq!(store.add_user(new_user("Ion")).unwrap().id, 2);
        assert_eq!(
            store.add_food(new_food("Eggs", MealType::Breakfast)).unwrap().id,
            1
        );
    }

    #[test]
    fn test_duplicate_food_rejected_case_insensitive() {
        let mut store = NutriStore::new();
        store.add_food(new_food("Eggs", MealType::Breakfast)).unwrap();
        let err = store.add_food(new_food("EGGS", MealType::Dinner)).unwrap_err();
        assert!(matches!(err, NutriError::DuplicateFood(_)));
        assert_eq!(store.foods().len(), 1);
    }

    #[test]
    fn test_invalid_user_rejected() {
        let mut store = NutriStore::new();
        let mut user = new_user("Ana");
        user.weight_kg = 0.0;
        assert!(matches!(
            store.add_user(user),
            Err(NutriError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_log_meal_requires_existing_refs() {
        let mut store = NutriStore::new();
        store.add_user(new_user("Ana")).unwrap();
        store.add_food(new_food("Eggs", MealType::Breakfast)).unwrap();

        let missing_food = NewMeal {
            user_id: 1,
            food_id: 9,
            grams: 100.0,
        };
        assert!(matches!(
            store.log_meal(missing_food),
            Err(NutriError::FoodNotFound(_))
        ));

        let missing_user = NewMeal {
            user_id: 9,
            food_id: 1,
            grams: 100.0,
        };
        assert!(matches!(
            store.log_meal(missing_user),
            Err(NutriError::UserNotFound(9))
        ));

        let zero_grams = NewMeal {
            user_id: 1,
            food_id: 1,
            grams: 0.0,
        };
        assert!(store.log_meal(zero_grams).is_err());

        let ok = NewMeal {
            user_id: 1,
            food_id: 1,
            grams: 120.0,
        };
        assert_eq!(store.log_meal(ok).unwrap().id, 1);
        assert_eq!(store.meals_for_user(1).len(), 1);
    }

    #[test]
    fn test_user_by_name() {
        let mut store = NutriStore::new();
        store.add_user(new_user("Ana")).unwrap();
        assert_eq!(store.user_by_name("  Ana ").unwrap().id, 1);
        assert!(matches!(
            store.user_by_name("ana"),
            Err(NutriError::UserNameNotFound(_))
        ));
        assert!(matches!(
            store.user_by_name("   "),
            Err(NutriError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_foods_of_type() {
        let mut store = NutriStore::new();
        store.add_food(new_food("Eggs", MealType::Breakfast)).unwrap();
        store.add_food(new_food("Soup", MealType::Lunch)).unwrap();
        store.add_food(new_food("Toast", MealType::Breakfast)).unwrap();
        assert_eq!(store.foods_of_type(MealType::Breakfast).len(), 2);
        assert!(store.foods_of_type(MealType::Dinner).is_empty());
    }
}
