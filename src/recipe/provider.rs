
use tracing::info;

use crate::cache::{CacheSettings, TtlCache};
use crate::error::{PlannerError, Result};
use crate::recipe::RecipeRequest;

/// Source of recipe text for a set of selected items.
pub trait RecipeProvider {
    fn recipe(&self, request: &RecipeRequest) -> Result<String>;
}

/// Offline provider: a markdown outline built from the request alone.
///
/// With [`OutlineRecipeProvider::with_prompt`] the outline also carries the
/// instruction text a generative recipe service would be sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineRecipeProvider {
    include_prompt: bool,
}

impl OutlineRecipeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt(mut self, include_prompt: bool) -> Self {
        self.include_prompt = include_prompt;
        self
    }
}

fn display_name(item: &str) -> String {
    let spaced = item.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl RecipeProvider for OutlineRecipeProvider {
    fn recipe(&self, request: &RecipeRequest) -> Result<String> {
        if request.items.is_empty() {
            return Err(PlannerError::RecipeUnavailable(format!(
                "no items selected for {}",
                request.meal
            )));
        }

        let mut out = format!("### {} for {}\n\n", request.meal.label(), request.name);
        out.push_str("**Ingredients**\n\n");
        for item in &request.items {
            out.push_str(&format!("- {}\n", display_name(item)));
        }
        out.push_str("\n**Steps**\n\n");
        out.push_str("1. Prepare and portion each ingredient.\n");
        out.push_str("2. Cook the grains, proteins and legumes; steam or saute the vegetables.\n");
        out.push_str("3. Combine, season to taste and serve.\n");
        out.push_str(&format!(
            "\nReady in under {} minutes.\n",
            request.max_cooking_minutes()
        ));
        if !request.allergies.is_empty() {
            out.push_str(&format!(
                "\nCheck every ingredient for: {}.\n",
                request.allergies.join(", ")
            ));
        }
        if self.include_prompt {
            out.push_str("\n**Recipe service prompt**\n\n");
            for line in request.prompt().lines() {
                out.push_str("> ");
                out.push_str(line);
                out.push('\n');
            }
        }
        Ok(out)
    }
}

/// Memoizes another recipe provider per request for a fixed time.
#[derive(Debug)]
pub struct CachedRecipeProvider<P> {
    inner: P,
    cache: TtlCache<RecipeRequest, String>,
}

impl<P> CachedRecipeProvider<P> {
    pub fn new(inner: P, settings: CacheSettings) -> Self {
        Self {
            inner,
            cache: TtlCache::new(settings),
        }
    }
}

impl<P: RecipeProvider> RecipeProvider for CachedRecipeProvider<P> {
    fn recipe(&self, request: &RecipeRequest) -> Result<String> {
        self.cache.get_or_try_insert_with(request.clone(), || {
            info!("generating {} recipe for {} items", request.meal, request.items.len());
            self.inner.recipe(request)
        })
    }
}

impl<T: RecipeProvider + ?Sized> RecipeProvider for Box<T> {
    fn recipe(&self, request: &RecipeRequest) -> Result<String> {
        (**self).recipe(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;
    use std::cell::Cell;
    use std::time::Duration;

    fn settings() -> CacheSettings {
        CacheSettings {
            ttl: Duration::from_secs(60),
            max_entries: 16,
        }
    }

    fn request(items: &[&str]) -> RecipeRequest {
        RecipeRequest {
            meal: MealType::Dinner,
            name: "Meera".to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
            preferences: vec![],
            allergies: vec!["Soy".to_string()],
        }
    }

    #[test]
    fn test_outline_lists_items() {
        let text = OutlineRecipeProvider::new()
            .recipe(&request(&["brown_rice", "tofu"]))
            .unwrap();
        assert!(text.starts_with("### Dinner for Meera"));
        assert!(text.contains("- Brown rice\n"));
        assert!(text.contains("- Tofu\n"));
        assert!(text.contains("under 60 minutes"));
        assert!(text.contains("Check every ingredient for: Soy."));
        assert!(!text.contains("Recipe service prompt"));
    }

    #[test]
    fn test_outline_with_prompt_quotes_it() {
        let req = request(&["brown_rice", "tofu"]);
        let text = OutlineRecipeProvider::new()
            .with_prompt(true)
            .recipe(&req)
            .unwrap();

        assert!(text.contains("**Recipe service prompt**"));
        assert!(text.contains("> Avoid these allergens: Soy"));
        let quoted = req.prompt().lines().count();
        assert_eq!(text.lines().filter(|l| l.starts_with('>')).count(), quoted);
    }

    #[test]
    fn test_outline_requires_items() {
        let err = OutlineRecipeProvider::new()
            .recipe(&request(&[]))
            .unwrap_err();
        assert!(matches!(err, PlannerError::RecipeUnavailable(_)));
    }

    struct Counting {
        calls: Cell<u32>,
    }

    impl RecipeProvider for Counting {
        fn recipe(&self, _request: &RecipeRequest) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            Ok("text".to_string())
        }
    }

    #[test]
    fn test_cached_recipes() {
        let provider = CachedRecipeProvider::new(
            Counting {
                calls: Cell::new(0),
            },
            settings(),
        );
        let req = request(&["tofu"]);
        assert_eq!(provider.recipe(&req).unwrap(), "text");
        assert_eq!(provider.recipe(&req).unwrap(), "text");
        assert_eq!(provider.inner.calls.get(), 1);
    }
}
