use assert_float_eq::*;

use meal_planner_rs::models::{ActivityLevel, Gender, UserProfile, WeightGoal};
use meal_planner_rs::planner::{
    budget_from_target, calculate_bmr, daily_calorie_needs, feet_inches_to_cm, meal_target,
    pounds_to_kg, BREAKFAST_SHARE, DINNER_SHARE, LUNCH_SHARE,
};

fn make_profile(gender: Gender, activity: ActivityLevel, goal: WeightGoal) -> UserProfile {
    UserProfile {
        name: "Sam".to_string(),
        age: 30,
        gender,
        weight_kg: 70.0,
        height_cm: 170.0,
        activity,
        goal,
        preferences: Vec::new(),
        allergies: Vec::new(),
    }
}

#[test]
fn test_bmr_by_gender() {
    assert_float_absolute_eq!(calculate_bmr(70.0, 170.0, 30, Gender::Male), 1619.2, 1e-9);
    assert_float_absolute_eq!(calculate_bmr(60.0, 165.0, 25, Gender::Female), 1346.65, 1e-9);
}

#[test]
fn test_daily_needs_scale_with_activity() {
    let sedentary = make_profile(Gender::Male, ActivityLevel::Sedentary, WeightGoal::Maintain);
    assert_float_absolute_eq!(daily_calorie_needs(&sedentary), 1943.04, 1e-9);

    let moderate = make_profile(
        Gender::Male,
        ActivityLevel::ModeratelyActive,
        WeightGoal::Maintain,
    );
    assert_float_absolute_eq!(daily_calorie_needs(&moderate), 2509.76, 1e-9);
}

#[test]
fn test_goal_shifts_daily_needs() {
    let lose = make_profile(Gender::Male, ActivityLevel::Sedentary, WeightGoal::Lose(500));
    assert_float_absolute_eq!(daily_calorie_needs(&lose), 1443.04, 1e-9);

    let gain = make_profile(Gender::Male, ActivityLevel::Sedentary, WeightGoal::Gain(300));
    assert_float_absolute_eq!(daily_calorie_needs(&gain), 2243.04, 1e-9);
}

#[test]
fn test_meal_split() {
    let daily = 1943.04;
    assert_float_absolute_eq!(meal_target(daily, BREAKFAST_SHARE), 582.91, 1e-9);
    assert_float_absolute_eq!(meal_target(daily, LUNCH_SHARE), 777.22, 1e-9);
    assert_float_absolute_eq!(meal_target(daily, DINNER_SHARE), 582.91, 1e-9);

    assert_float_absolute_eq!(BREAKFAST_SHARE + LUNCH_SHARE + DINNER_SHARE, 1.0, 1e-12);
}

#[test]
fn test_budget_truncates() {
    assert_eq!(budget_from_target(582.91), 582);
    assert_eq!(budget_from_target(777.99), 777);
    assert_eq!(budget_from_target(0.4), 0);
}

#[test]
fn test_imperial_conversions() {
    assert_float_absolute_eq!(pounds_to_kg(154.0), 69.853, 1e-3);
    assert_float_absolute_eq!(feet_inches_to_cm(5.0, 9.0), 175.26, 1e-9);
}
