use serde::{Deserialize, Serialize};

/// A meal as submitted by a caller, before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMeal {
    pub user_id: u32,
    pub food_id: u32,
    pub grams: f64,
}

/// A logged meal: some grams of one food eaten by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    pub id: u32,
    pub user_id: u32,
    pub food_id: u32,
    pub grams: f64,
}

impl MealEntry {
    pub fn from_new(id: u32, new: NewMeal) -> Self {
        let NewMeal {
            user_id,
            food_id,
            grams,
        } = new;

        Self {
            id,
            user_id,
            food_id,
            grams,
        }
    }
}
