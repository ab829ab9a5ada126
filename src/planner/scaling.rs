use crate::models::{FoodItem, NutrientQuantity};

/// Scale a per-100g macro profile to `grams`.
pub fn scale_nutrition(
    kcal_100g: f64,
    protein_100g: f64,
    fat_100g: f64,
    carb_100g: f64,
    grams: f64,
) -> NutrientQuantity {
    let factor = grams / 100.0;
    NutrientQuantity {
        kcal: kcal_100g * factor,
        protein_g: protein_100g * factor,
        fat_g: fat_100g * factor,
        carb_g: carb_100g * factor,
    }
}

/// Nutrition delivered by `grams` of a catalog food.
pub fn scale_food(food: &FoodItem, grams: f64) -> NutrientQuantity {
    scale_nutrition(
        food.kcal_100g,
        food.protein_100g,
        food.fat_100g,
        food.carb_100g,
        grams,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_at_100g() {
        let q = scale_nutrition(250.0, 12.0, 8.5, 30.0, 100.0);
        assert_eq!(q, NutrientQuantity::new(250.0, 12.0, 8.5, 30.0));
    }

    #[test]
    fn test_zero_grams() {
        let q = scale_nutrition(250.0, 12.0, 8.5, 30.0, 0.0);
        assert_eq!(q, NutrientQuantity::default());
    }

    #[test]
    fn test_150g() {
        let q = scale_nutrition(200.0, 10.0, 5.0, 20.0, 150.0);
        assert!((q.kcal - 300.0).abs() < 1e-9);
        assert!((q.protein_g - 15.0).abs() < 1e-9);
        assert!((q.fat_g - 7.5).abs() < 1e-9);
        assert!((q.carb_g - 30.0).abs() < 1e-9);
    }
}
