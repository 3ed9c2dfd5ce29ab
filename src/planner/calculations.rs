use crate::models::{Gender, UserProfile};
use crate::planner::constants::*;

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert pounds to kilograms.
pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * UNITS_LB_TO_KG
}

/// Convert feet + inches to centimetres.
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    (feet * 12.0 + inches) * UNITS_IN_TO_CM
}

/// Basal metabolic rate (kcal/day).
///
/// Formula: 9.99 * kg + 6.25 * cm - 4.92 * age + (5 | -161)
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let offset = match gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };
    BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm - BMR_AGE_COEF * f64::from(age)
        + offset
}

/// Daily calorie needs: BMR scaled by activity, rounded to two decimals,
/// then shifted by the weight goal.
pub fn daily_calorie_needs(profile: &UserProfile) -> f64 {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
    );
    let maintenance = round2(bmr * profile.activity.factor());
    maintenance + profile.goal.adjustment()
}

/// Calorie target for a meal that gets `share` of the daily calories.
pub fn meal_target(daily_calories: f64, share: f64) -> f64 {
    round2(daily_calories * share)
}

/// Whole-calorie budget for a target (fractional part truncated).
pub fn budget_from_target(target: f64) -> i64 {
    target.trunc() as i64
}
