use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{MealPlan, RecipeStatus};

/// Render a day plan as a markdown document.
pub fn meal_plan_markdown(plan: &MealPlan) -> String {
    let mut md = format!("# {}'s Personalized Meal Plan\n\n", plan.name);
    md.push_str(&format!(
        "Daily Calorie Needs: {:.2} calories\n\n",
        plan.daily_calories
    ));

    for entry in &plan.meals {
        md.push_str(&format!("## {}\n", entry.meal.label()));
        md.push_str(&format!("Target Calories: {:.2}\n\n", entry.target_calories));
        md.push_str(&format!("Total Calories: {}\n\n", entry.selection.total));

        for item in &entry.selection.items {
            md.push_str(&format!("- {} ({} cal)\n", item.name, item.calories));
        }
        if !entry.selection.is_empty() {
            md.push('\n');
        }

        if let RecipeStatus::Ready(text) = &entry.recipe {
            md.push_str(text);
            md.push_str("\n\n");
        }
    }

    md
}

/// Write the markdown rendering of a plan to `path`.
pub fn write_markdown(plan: &MealPlan, path: &Path) -> Result<()> {
    fs::write(path, meal_plan_markdown(plan))?;
    Ok(())
}

/// Write the whole plan, recipes included, as pretty-printed JSON.
pub fn write_json(plan: &MealPlan, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write selected items as CSV: meal, category, item, calories.
pub fn write_selection_csv(plan: &MealPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["meal", "category", "item", "calories"])?;

    for entry in &plan.meals {
        for item in &entry.selection.items {
            wtr.write_record([
                entry.meal.as_str(),
                item.category.as_str(),
                item.name.as_str(),
                item.calories.to_string().as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogItem, MealPlanEntry, MealType, Selection};
    use tempfile::NamedTempFile;

    fn sample_plan() -> MealPlan {
        MealPlan {
            name: "Anu".to_string(),
            daily_calories: 2000.0,
            meals: vec![
                MealPlanEntry {
                    meal: MealType::Breakfast,
                    target_calories: 600.0,
                    budget: 600,
                    selection: Selection {
                        items: vec![
                            CatalogItem::new("whole_grains", "oatmeal", 150),
                            CatalogItem::new("fruits", "berries", 50),
                        ],
                        total: 200,
                    },
                    recipe: RecipeStatus::Ready("### Oats".to_string()),
                },
                MealPlanEntry {
                    meal: MealType::Lunch,
                    target_calories: 800.0,
                    budget: 800,
                    selection: Selection::default(),
                    recipe: RecipeStatus::Failed("no items".to_string()),
                },
            ],
        }
    }

    #[test]
    fn test_markdown_sections() {
        let md = meal_plan_markdown(&sample_plan());
        assert!(md.starts_with("# Anu's Personalized Meal Plan\n\n"));
        assert!(md.contains("Daily Calorie Needs: 2000.00 calories"));
        assert!(md.contains("## Breakfast\nTarget Calories: 600.00"));
        assert!(md.contains("- oatmeal (150 cal)\n"));
        assert!(md.contains("### Oats"));
        assert!(md.contains("## Lunch\n"));
        assert!(!md.contains("no items"));
    }

    #[test]
    fn test_json_document() {
        let file = NamedTempFile::new().unwrap();
        write_json(&sample_plan(), file.path()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(value["name"], "Anu");
        assert_eq!(value["meals"][0]["meal"], "breakfast");
        assert_eq!(value["meals"][0]["selection"]["total"], 200);
        assert_eq!(
            value["meals"][0]["selection"]["items"][1]["category"],
            "fruits"
        );
        assert_eq!(value["meals"][0]["recipe"]["status"], "ready");
        assert_eq!(value["meals"][1]["recipe"]["status"], "failed");
        assert_eq!(value["meals"][1]["recipe"]["text"], "no items");
    }

    #[test]
    fn test_csv_rows() {
        let file = NamedTempFile::new().unwrap();
        write_selection_csv(&sample_plan(), file.path()).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "meal,category,item,calories",
                "breakfast,whole_grains,oatmeal,150",
                "breakfast,fruits,berries,50",
            ]
        );
    }
}
