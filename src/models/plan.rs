use serde::Serialize;

use crate::models::{CatalogItem, MealType};

/// Items chosen for one calorie budget plus their calorie total.
///
/// Item order is reconstruction order and carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selection {
    pub items: Vec<CatalogItem>,
    pub total: i64,
}

impl Selection {
    /// Names of the selected items, as handed to recipe providers.
    pub fn item_names(&self) -> Vec<String> {
        self.items.iter().map(|i| i.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Recipe text attached to a planned meal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum RecipeStatus {
    #[default]
    Pending,
    Ready(String),
    Failed(String),
}

/// One meal of a day plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealPlanEntry {
    pub meal: MealType,

    /// Calorie target for this meal, rounded to two decimals.
    pub target_calories: f64,

    /// Whole-calorie budget handed to the selector.
    pub budget: i64,

    pub selection: Selection,

    pub recipe: RecipeStatus,
}

/// A full day plan for one person.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealPlan {
    pub name: String,
    pub daily_calories: f64,
    pub meals: Vec<MealPlanEntry>,
}

impl MealPlan {
    /// Sum of achieved calories over all meals.
    pub fn total_calories(&self) -> i64 {
        self.meals.iter().map(|m| m.selection.total).sum()
    }
}
