use crate::models::MealType;

/// Inputs for one recipe. Doubles as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipeRequest {
    pub meal: MealType,
    pub name: String,
    pub items: Vec<String>,
    pub preferences: Vec<String>,
    pub allergies: Vec<String>,
}

fn list_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}

impl RecipeRequest {
    /// Longest total cooking time to ask for.
    pub fn max_cooking_minutes(&self) -> u32 {
        match self.meal {
            MealType::Breakfast => 40,
            MealType::Lunch | MealType::Dinner => 60,
        }
    }

    /// Instruction text for a generative recipe service.
    pub fn prompt(&self) -> String {
        let meal = self.meal.as_str();
        format!(
            "Create a detailed, personalized Indian cuisine recipe for {name} using the \
following ingredients for their {meal}:\n{items}\n\n\
Consider these dietary preferences: {prefs}\n\
Avoid these allergens: {allergies}\n\n\
Use these sections, formatted as markdown with clear headers:\n\
1. Recipe Title: an appetizing name for this Indian {meal} dish\n\
2. Introduction: a short welcome to {name} describing the dish's benefits\n\
3. Preparation Time: prep, cooking and total time in minutes\n\
4. Servings\n\
5. Ingredients: exact measurements, including every ingredient listed above\n\
6. Instructions: numbered steps using Indian cooking techniques\n\
7. Nutrition Information: calories, protein, carbs, fat and fiber per serving\n\
8. Chef's Tips: 2-3 practical tips\n\
9. Variations: 1-2 simple variations\n\n\
Keep the total cooking time under {minutes} minutes and use a warm, encouraging tone.",
            name = self.name,
            meal = meal,
            items = self.items.join(", "),
            prefs = list_or_none(&self.preferences),
            allergies = list_or_none(&self.allergies),
            minutes = self.max_cooking_minutes(),
        )
    }
}
