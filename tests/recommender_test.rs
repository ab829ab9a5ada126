use nutri_planner::models::{FoodItem, MealType, NutrientQuantity};
use nutri_planner::planner::recommend_foods;

fn make_food(id: u32, name: &str, kcal: f64, p: f64, f: f64, c: f64) -> FoodItem {
    FoodItem {
        id,
        name: name.to_string(),
        kcal_100g: kcal,
        protein_100g: p,
        fat_100g: f,
        carb_100g: c,
        meal_type: MealType::Lunch,
    }
}

fn sample_catalog() -> Vec<FoodItem> {
    vec![
        make_food(1, "Greek Yogurt", 97.0, 9.0, 5.0, 3.9),
        make_food(2, "Almonds", 579.0, 21.2, 49.9, 21.6),
        make_food(3, "Banana", 89.0, 1.1, 0.3, 22.8),
        make_food(4, "Tuna", 132.0, 28.0, 1.3, 0.0),
        make_food(5, "Bread", 265.0, 9.0, 3.2, 49.0),
    ]
}

#[test]
fn test_k_larger_than_catalog() {
    let foods = sample_catalog();
    let target = NutrientQuantity::new(100.0, 10.0, 5.0, 5.0);

    let recs = recommend_foods(&foods, &target, 50);
    assert_eq!(recs.len(), foods.len());
}

#[test]
fn test_sorted_ascending() {
    let foods = sample_catalog();
    let target = NutrientQuantity::new(250.0, 10.0, 10.0, 30.0);

    let recs = recommend_foods(&foods, &target, 5);
    for pair in recs.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
    }
    assert_eq!(recs[0].name, "Bread");
    assert_eq!(recs[4].name, "Almonds");
}

#[test]
fn test_empty_catalog() {
    let target = NutrientQuantity::new(100.0, 10.0, 5.0, 5.0);
    assert!(recommend_foods(&[], &target, 5).is_empty());
}

#[test]
fn test_result_carries_food_fields() {
    let foods = sample_catalog();
    let target = NutrientQuantity::new(132.0, 28.0, 1.3, 0.0);

    let recs = recommend_foods(&foods, &target, 1);
    assert_eq!(recs.len(), 1);
    let top = &recs[0];
    assert_eq!(top.id, 4);
    assert_eq!(top.name, "Tuna");
    assert_eq!(top.kcal_100g, 132.0);
    assert_eq!(top.protein_100g, 28.0);
    assert_eq!(top.fat_100g, 1.3);
    assert_eq!(top.carb_100g, 0.0);
    assert_eq!(top.distance, 0.0);
}

#[test]
fn test_duplicate_entries_keep_catalog_order() {
    let mut foods = sample_catalog();
    foods.push(make_food(6, "Tuna (canned)", 132.0, 28.0, 1.3, 0.0));
    let target = NutrientQuantity::new(130.0, 27.0, 1.0, 0.0);

    let recs = recommend_foods(&foods, &target, 2);
    let ids: Vec<u32> = recs.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![4, 6]);
    assert_eq!(recs[0].distance, recs[1].distance);
}
