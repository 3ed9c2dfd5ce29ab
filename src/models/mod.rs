mod catalog;
mod meal;
mod plan;
mod profile;

pub use catalog::{Catalog, CatalogItem};
pub use meal::MealType;
pub use plan::{MealPlan, MealPlanEntry, RecipeStatus, Selection};
pub use profile::{ActivityLevel, Gender, Units, UserProfile, WeightGoal};
