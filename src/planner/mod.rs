pub mod calculations;
pub mod constants;
pub mod meal_plan;
pub mod selector;

pub use calculations::{
    budget_from_target, calculate_bmr, daily_calorie_needs, feet_inches_to_cm, meal_target,
    pounds_to_kg, round2,
};
pub use constants::*;
pub use meal_plan::{attach_recipes, generate_meal_plan};
pub use selector::{select, select_items, Selector};
