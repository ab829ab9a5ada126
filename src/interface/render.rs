use serde::Serialize;

use crate::error::Result;
use crate::models::{FoodItem, MealPlan, UserProfile};
use crate::planner::{CalorieReport, DailySummary, FoodRecommendation, MealSummary};

/// Display calorie targets.
pub fn display_calories(user: &UserProfile, report: &CalorieReport) {
    println!();
    println!("=== Calories for {} ===", user.name);
    println!("BMR:         {:>6} kcal", report.bmr);
    println!("TDEE:        {:>6} kcal", report.tdee);
    println!("Recommended: {:>6} kcal", report.recommended_calories);
    println!();
}

/// Display a meal plan in a formatted table.
pub fn display_meal_plan(plan: &MealPlan) {
    if plan.is_empty() {
        println!("No meal plan generated.");
        return;
    }

    println!();
    println!(
        "=== Meal Plan ({:.1} kcal recommended) ===",
        plan.recommended_calories
    );
    println!();

    let max_name_len = plan
        .meals
        .iter()
        .map(|m| m.food_name.len())
        .max()
        .unwrap_or(10);

    for item in &plan.meals {
        println!(
            "{:<10} {:<width$} {:>6.1} g | {:>6.1} kcal  P:{:.1} F:{:.1} C:{:.1}",
            item.meal_name,
            item.food_name,
            item.grams,
            item.nutrition.kcal,
            item.nutrition.protein_g,
            item.nutrition.fat_g,
            item.nutrition.carb_g,
            width = max_name_len
        );
    }

    let total = plan.total();
    println!();
    println!("--- Summary ---");
    println!("Total calories: {:.1}", total.kcal);
    println!(
        "Protein: {:.1} g  Fat: {:.1} g  Carbs: {:.1} g",
        total.protein_g, total.fat_g, total.carb_g
    );
    println!();
}

/// Display one logged meal.
pub fn display_meal_summary(summary: &MealSummary, food_name: &str) {
    println!(
        "Meal #{}: {} g of {} - {:.2} kcal  P:{:.2} F:{:.2} C:{:.2}",
        summary.meal_id,
        summary.grams,
        food_name,
        summary.nutrition.kcal,
        summary.nutrition.protein_g,
        summary.nutrition.fat_g,
        summary.nutrition.carb_g
    );
}

/// Display a user's daily summary.
pub fn display_daily_summary(user: &UserProfile, summary: &DailySummary) {
    display_calories(user, &summary.calories);

    if summary.meals.is_empty() {
        println!("No meals logged.");
    } else {
        for meal in &summary.meals {
            println!(
                "  #{:<4} {} - {} g, {:.2} kcal  P:{:.2} F:{:.2} C:{:.2}",
                meal.meal_id,
                meal.food_name,
                meal.grams,
                meal.nutrition.kcal,
                meal.nutrition.protein_g,
                meal.nutrition.fat_g,
                meal.nutrition.carb_g
            );
        }
    }

    println!();
    println!("Eaten:     {:.2} kcal", summary.total_meal_calories);
    println!("Remaining: {:.2} kcal", summary.remaining_calories());
    println!();
}

/// Display kNN recommendations.
pub fn display_recommendations(recs: &[FoodRecommendation]) {
    if recs.is_empty() {
        println!("No recommendations.");
        return;
    }

    println!();
    println!("=== Closest foods ===");
    for (i, rec) in recs.iter().enumerate() {
        println!(
            "{:>3}. {} - {} kcal, P:{} F:{} C:{} (distance {:.2})",
            i + 1,
            rec.name,
            rec.kcal_100g,
            rec.protein_100g,
            rec.fat_100g,
            rec.carb_100g,
            rec.distance
        );
    }
    println!();
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  #{:<4} {} [{}] - {} kcal, P:{} F:{} C:{} per 100g",
            food.id,
            food.name,
            food.meal_type,
            food.kcal_100g,
            food.protein_100g,
            food.fat_100g,
            food.carb_100g
        );
    }

    println!();
}

/// Display registered users.
pub fn display_user_list(users: &[UserProfile]) {
    if users.is_empty() {
        println!("Users: (none)");
        return;
    }

    println!();
    for user in users {
        println!(
            "  #{:<4} {} ({}, {} y, {} kg, {} cm) activity={} goal={}",
            user.id,
            user.name,
            user.sex,
            user.age,
            user.weight_kg,
            user.height_cm,
            user.activity,
            user.goal
        );
    }
    println!();
}

/// Pretty JSON for any report.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Print a report as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientQuantity;

    #[test]
    fn test_calorie_report_json() {
        let report = CalorieReport {
            bmr: 1320,
            tdee: 1815,
            recommended_calories: 1415,
        };
        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(value["recommended_calories"], 1415);
        assert_eq!(value["bmr"], 1320);
    }

    #[test]
    fn test_recommendation_json_carries_distance() {
        let recs = vec![FoodRecommendation {
            id: 4,
            name: "Tuna".to_string(),
            kcal_100g: 132.0,
            protein_100g: 28.0,
            fat_100g: 1.3,
            carb_100g: 0.0,
            distance: 0.5,
        }];
        let value: serde_json::Value = serde_json::from_str(&to_json(&recs).unwrap()).unwrap();
        assert_eq!(value[0]["name"], "Tuna");
        assert_eq!(value[0]["distance"], 0.5);
    }

    #[test]
    fn test_meal_summary_json() {
        let summary = MealSummary {
            meal_id: 7,
            user_id: 1,
            food_id: 3,
            grams: 200.0,
            nutrition: NutrientQuantity::new(122.0, 7.0, 6.6, 9.4),
        };
        let value: serde_json::Value = serde_json::from_str(&to_json(&summary).unwrap()).unwrap();
        assert_eq!(value["meal_id"], 7);
        assert_eq!(value["nutrition"]["kcal"], 122.0);
    }
}
