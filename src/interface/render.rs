use crate::models::{Catalog, MealPlan, RecipeStatus, Selection};

/// Display one selection as an aligned item table.
pub fn display_selection(title: &str, budget: i64, selection: &Selection) {
    println!();
    println!("=== {} ===", title);
    println!("Target: {} cal | Achieved: {} cal", budget, selection.total);
    println!();

    if selection.is_empty() {
        println!("  (no items fit this budget)");
        return;
    }

    let max_name_len = selection
        .items
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(10);

    for (i, item) in selection.items.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>4} cal  [{}]",
            i + 1,
            item.name,
            item.calories,
            item.category,
            width = max_name_len
        );
    }
}

/// Display a full day plan, optionally with recipe text.
pub fn display_meal_plan(plan: &MealPlan, show_recipes: bool) {
    println!();
    println!("=== {}'s Personalized Meal Plan ===", plan.name);
    println!("Daily Calorie Needs: {:.2} calories", plan.daily_calories);

    for entry in &plan.meals {
        let title = format!(
            "{} (target {:.2} cal)",
            entry.meal.label(),
            entry.target_calories
        );
        display_selection(&title, entry.budget, &entry.selection);

        if show_recipes {
            match &entry.recipe {
                RecipeStatus::Ready(text) => {
                    println!();
                    println!("{}", text);
                }
                RecipeStatus::Failed(reason) => {
                    println!();
                    println!("  Recipe unavailable: {}", reason);
                }
                RecipeStatus::Pending => {}
            }
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Total calories: {}", plan.total_calories());
    println!();
}

/// Display a catalog grouped by category.
pub fn display_catalog(catalog: &Catalog, title: &str) {
    if catalog.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, catalog.total_items());

    for category in catalog.categories() {
        println!();
        println!("  {}", category);
        if let Some(items) = catalog.category(category) {
            for (name, calories) in items {
                println!("    {} - {} cal", name, calories);
            }
        }
    }

    println!();
}
