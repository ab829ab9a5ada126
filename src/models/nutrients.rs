use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Round a float to n decimal places, halves to even.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Energy and macro-nutrient amounts for some quantity of food.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientQuantity {
    pub kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carb_g: f64,
}

impl NutrientQuantity {
    pub fn new(kcal: f64, protein_g: f64, fat_g: f64, carb_g: f64) -> Self {
        Self {
            kcal,
            protein_g,
            fat_g,
            carb_g,
        }
    }

    /// Copy with every field rounded to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            kcal: round_to(self.kcal, decimals),
            protein_g: round_to(self.protein_g, decimals),
            fat_g: round_to(self.fat_g, decimals),
            carb_g: round_to(self.carb_g, decimals),
        }
    }

    /// Feature vector in (kcal, protein, fat, carb) order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.kcal, self.protein_g, self.fat_g, self.carb_g]
    }

    /// Euclidean distance to another quantity in feature space.
    pub fn distance(&self, other: &Self) -> f64 {
        self.as_array()
            .into_iter()
            .zip(other.as_array())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

impl Add for NutrientQuantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            kcal: self.kcal + rhs.kcal,
            protein_g: self.protein_g + rhs.protein_g,
            fat_g: self.fat_g + rhs.fat_g,
            carb_g: self.carb_g + rhs.carb_g,
        }
    }
}

impl AddAssign for NutrientQuantity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
