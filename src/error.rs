use thiserror::Error;

use crate::models::MealType;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("User not found: {0}")]
    UserNotFound(u32),

    #[error("No user named '{0}'")]
    UserNameNotFound(String),

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Meal not found: {0}")]
    MealNotFound(u32),

    #[error("Food already exists: {0}")]
    DuplicateFood(String),

    #[error("Food '{0}' has no positive kcal per 100g")]
    InvalidDivisor(String),

    #[error("No foods available for '{0}'")]
    EmptyCandidatePool(MealType),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, NutriError>;
