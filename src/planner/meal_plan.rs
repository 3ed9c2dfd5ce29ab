use tracing::{info, warn};

use crate::catalog::{CatalogProvider, CatalogRequest};
use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::models::{MealPlan, MealPlanEntry, MealType, RecipeStatus, UserProfile};
use crate::planner::calculations::{budget_from_target, daily_calorie_needs, meal_target};
use crate::planner::selector::Selector;
use crate::recipe::{RecipeProvider, RecipeRequest};

/// Generate a day plan.
///
/// Computes daily needs, splits them across meals, fetches a catalog per meal
/// and selects items for each meal's budget. Recipes are left pending.
pub fn generate_meal_plan<P>(
    profile: &UserProfile,
    provider: &P,
    config: &PlannerConfig,
) -> Result<MealPlan>
where
    P: CatalogProvider + ?Sized,
{
    profile.validate()?;
    config.validate()?;

    let daily_calories = daily_calorie_needs(profile);
    if daily_calories <= 0.0 {
        return Err(PlannerError::invalid(format!(
            "daily calorie needs are not positive ({:.2})",
            daily_calories
        )));
    }

    let selector = Selector::new(config.max_table_cells);
    let mut meals = Vec::with_capacity(MealType::ALL.len());

    for meal in MealType::ALL {
        let target_calories = meal_target(daily_calories, config.meal_shares.share(meal));
        let budget = budget_from_target(target_calories);

        let request = CatalogRequest::new(meal, &profile.preferences, &profile.allergies);
        let catalog = provider.catalog(&request)?;
        let selection = selector.select(budget, &catalog)?;

        info!(
            meal = meal.as_str(),
            budget,
            achieved = selection.total,
            items = selection.len(),
            "meal planned"
        );

        meals.push(MealPlanEntry {
            meal,
            target_calories,
            budget,
            selection,
            recipe: RecipeStatus::Pending,
        });
    }

    Ok(MealPlan {
        name: profile.name.clone(),
        daily_calories,
        meals,
    })
}

/// Fill in recipes for every meal. Failures are recorded per meal.
pub fn attach_recipes<R>(plan: &mut MealPlan, profile: &UserProfile, provider: &R)
where
    R: RecipeProvider + ?Sized,
{
    for entry in &mut plan.meals {
        let request = RecipeRequest {
            meal: entry.meal,
            name: profile.name.clone(),
            items: entry.selection.item_names(),
            preferences: profile.preferences.clone(),
            allergies: profile.allergies.clone(),
        };

        entry.recipe = match provider.recipe(&request) {
            Ok(text) => RecipeStatus::Ready(text),
            Err(e) => {
                warn!("{} recipe failed: {}", entry.meal, e);
                RecipeStatus::Failed(e.to_string())
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalogProvider;
    use crate::models::{ActivityLevel, Gender, WeightGoal};
    use crate::recipe::OutlineRecipeProvider;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Test".to_string(),
            age: 30,
            gender: Gender::Male,
            weight_kg: 70.0,
            height_cm: 170.0,
            activity: ActivityLevel::Sedentary,
            goal: WeightGoal::Maintain,
            preferences: vec![],
            allergies: vec![],
        }
    }

    #[test]
    fn test_plan_has_three_meals_within_budget() {
        let plan =
            generate_meal_plan(&profile(), &StaticCatalogProvider, &PlannerConfig::default())
                .unwrap();

        assert_eq!(plan.meals.len(), 3);
        assert!((plan.daily_calories - 1943.04).abs() < 0.001);
        let budgets: Vec<i64> = plan.meals.iter().map(|m| m.budget).collect();
        // 30% / 40% / 30% of 1943.04, truncated
        assert_eq!(budgets, vec![582, 777, 582]);
        for entry in &plan.meals {
            assert!(entry.selection.total <= entry.budget);
            assert_eq!(entry.recipe, RecipeStatus::Pending);
        }
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let mut p = profile();
        p.age = 0;
        let err = generate_meal_plan(&p, &StaticCatalogProvider, &PlannerConfig::default())
            .unwrap_err();
        assert!(matches!(err, PlannerError::InvalidArgument(_)));
    }

    #[test]
    fn test_non_positive_needs_rejected() {
        let mut p = profile();
        p.weight_kg = 1.0;
        p.height_cm = 1.0;
        p.age = 120;
        let err = generate_meal_plan(&p, &StaticCatalogProvider, &PlannerConfig::default())
            .unwrap_err();
        assert!(matches!(err, PlannerError::InvalidArgument(_)));
    }

    #[test]
    fn test_attach_recipes() {
        let p = profile();
        let mut plan =
            generate_meal_plan(&p, &StaticCatalogProvider, &PlannerConfig::default()).unwrap();
        attach_recipes(&mut plan, &p, &OutlineRecipeProvider::new());

        for entry in &plan.meals {
            assert!(matches!(entry.recipe, RecipeStatus::Ready(_)));
        }
    }
}
