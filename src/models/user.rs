use serde::{Deserialize, Serialize};

use crate::models::labels::{ActivityLevel, Goal, Sex};

/// User fields as submitted by a caller, before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub sex: Sex,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

impl NewUser {
    /// Non-empty name and positive age, weight and height.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.age > 0 && self.weight_kg > 0.0 && self.height_cm > 0.0
    }
}

/// A registered user and the attributes the energy model needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u32,
    pub name: String,
    pub sex: Sex,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

impl UserProfile {
    pub fn from_new(id: u32, new: NewUser) -> Self {
        let NewUser {
            name,
            sex,
            age,
            weight_kg,
            height_cm,
            activity,
            goal,
        } = new;

        Self {
            id,
            name,
            sex,
            age,
            weight_kg,
            height_cm,
            activity,
            goal,
        }
    }
}
