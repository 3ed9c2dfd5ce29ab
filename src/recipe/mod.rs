mod provider;
mod request;

pub use provider::{CachedRecipeProvider, OutlineRecipeProvider, RecipeProvider};
pub use request::RecipeRequest;
