use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalize a free-form label for lookup.
fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Biological sex used by the BMR formula.
///
/// Only "m" selects the male branch; any other label is treated as female.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn parse_label(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "m" => Some(Sex::Male),
            "f" => Some(Sex::Female),
            _ => None,
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::parse_label(label).unwrap_or(Sex::Female)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }
}

/// Self-reported activity level.
///
/// Labels: "deloc" (sedentary), "usor" (light), "moderat", "intens".
/// Unrecognized labels fall back to the lowest tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Intense,
}

impl ActivityLevel {
    pub fn parse_label(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "deloc" => Some(ActivityLevel::Sedentary),
            "usor" => Some(ActivityLevel::Light),
            "moderat" => Some(ActivityLevel::Moderate),
            "intens" => Some(ActivityLevel::Intense),
            _ => None,
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::parse_label(label).unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "deloc",
            ActivityLevel::Light => "usor",
            ActivityLevel::Moderate => "moderat",
            ActivityLevel::Intense => "intens",
        }
    }

    pub fn all() -> [ActivityLevel; 4] {
        [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Intense,
        ]
    }
}

/// Weight goal.
///
/// "slabit" = lose weight, "masa" = gain mass; anything else maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    Lose,
    Gain,
    #[default]
    Maintain,
}

impl Goal {
    pub fn parse_label(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "slabit" => Some(Goal::Lose),
            "masa" => Some(Goal::Gain),
            "mentinere" => Some(Goal::Maintain),
            _ => None,
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::parse_label(label).unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::Lose => "slabit",
            Goal::Gain => "masa",
            Goal::Maintain => "mentinere",
        }
    }

    pub fn all() -> [Goal; 3] {
        [Goal::Lose, Goal::Gain, Goal::Maintain]
    }
}

/// Meal-type category a food belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MealType {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
}

impl MealType {
    pub fn parse_label(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            _ => None,
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::parse_label(label).unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl From<String> for Sex {
    fn from(label: String) -> Self {
        Sex::from_label(&label)
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        sex.label().to_string()
    }
}

impl From<String> for ActivityLevel {
    fn from(label: String) -> Self {
        ActivityLevel::from_label(&label)
    }
}

impl From<ActivityLevel> for String {
    fn from(level: ActivityLevel) -> Self {
        level.label().to_string()
    }
}

impl From<String> for Goal {
    fn from(label: String) -> Self {
        Goal::from_label(&label)
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        goal.label().to_string()
    }
}

impl From<String> for MealType {
    fn from(label: String) -> Self {
        MealType::from_label(&label)
    }
}

impl From<MealType> for String {
    fn from(meal_type: MealType) -> Self {
        meal_type.label().to_string()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
