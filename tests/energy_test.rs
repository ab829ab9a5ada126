#[macro_use]
extern crate assert_float_eq;

use nutri_planner::models::{ActivityLevel, Goal, Sex, UserProfile};
use nutri_planner::planner::{
    activity_multiplier, adjust_goal, basal_metabolic_rate, recommended_calories, scale_nutrition,
    CalorieTargets,
};

fn make_user(
    sex: &str,
    weight: f64,
    height: f64,
    age: u32,
    activity: &str,
    goal: &str,
) -> UserProfile {
    UserProfile {
        id: 1,
        name: "Test".to_string(),
        sex: Sex::from_label(sex),
        age,
        weight_kg: weight,
        height_cm: height,
        activity: ActivityLevel::from_label(activity),
        goal: Goal::from_label(goal),
    }
}

#[test]
fn test_bmr_sex_label_case_insensitive() {
    for (w, h, a) in [(60.0, 165.0, 30), (95.5, 190.0, 52), (45.0, 150.0, 18)] {
        let lower = basal_metabolic_rate(Sex::from_label("m"), w, h, a);
        let upper = basal_metabolic_rate(Sex::from_label("M"), w, h, a);
        let female = basal_metabolic_rate(Sex::from_label("f"), w, h, a);

        assert_eq!(lower, upper);
        assert_float_absolute_eq!(lower - female, 166.0, 1e-9);
    }
}

#[test]
fn test_unrecognized_activity_is_sedentary() {
    let sedentary = activity_multiplier(ActivityLevel::from_label("deloc"));
    assert_eq!(sedentary, 1.2);

    for label in ["", "athlete", "USORR", "very active"] {
        assert_eq!(activity_multiplier(ActivityLevel::from_label(label)), sedentary);
    }
    assert_eq!(activity_multiplier(ActivityLevel::from_label("INTENS")), 1.725);
}

#[test]
fn test_goal_adjustment() {
    for tdee in [1200.0, 1815.34375, 3100.0] {
        assert_eq!(adjust_goal(tdee, Goal::from_label("slabit")), tdee - 400.0);
        assert_eq!(adjust_goal(tdee, Goal::from_label("Masa")), tdee + 300.0);
        assert_eq!(adjust_goal(tdee, Goal::from_label("anything_else")), tdee);
    }
}

#[test]
fn test_end_to_end_female_lose_weight() {
    let user = make_user("f", 60.0, 165.0, 30, "usor", "slabit");
    let targets = CalorieTargets::for_profile(&user);

    assert_float_absolute_eq!(targets.bmr, 1320.25, 1e-9);
    assert_float_absolute_eq!(targets.tdee, 1815.34375, 1e-9);
    assert_float_absolute_eq!(targets.recommended, 1415.34375, 1e-9);
    assert_eq!(targets.rounded().recommended_calories, 1415);
    assert_eq!(recommended_calories(&user), targets.recommended);
}

#[test]
fn test_calorie_report_half_rounds_to_even() {
    let user = make_user("f", 60.0, 166.0, 30, "deloc", "mentinere");
    let targets = CalorieTargets::for_profile(&user);

    assert_float_absolute_eq!(targets.bmr, 1326.5, 1e-9);
    assert_eq!(targets.rounded().bmr, 1326);
}

#[test]
fn test_scale_nutrition_properties() {
    let (k, p, f, c) = (523.0, 12.5, 31.0, 48.2);

    let identity = scale_nutrition(k, p, f, c, 100.0);
    assert_eq!(identity.kcal, k);
    assert_eq!(identity.protein_g, p);
    assert_eq!(identity.fat_g, f);
    assert_eq!(identity.carb_g, c);

    let zero = scale_nutrition(k, p, f, c, 0.0);
    assert_eq!(zero.kcal, 0.0);
    assert_eq!(zero.protein_g, 0.0);
    assert_eq!(zero.fat_g, 0.0);
    assert_eq!(zero.carb_g, 0.0);
}

#[test]
fn test_scale_nutrition_150g() {
    let q = scale_nutrition(200.0, 10.0, 5.0, 20.0, 150.0);
    assert_float_absolute_eq!(q.kcal, 300.0, 1e-9);
    assert_float_absolute_eq!(q.protein_g, 15.0, 1e-9);
    assert_float_absolute_eq!(q.fat_g, 7.5, 1e-9);
    assert_float_absolute_eq!(q.carb_g, 30.0, 1e-9);
}
