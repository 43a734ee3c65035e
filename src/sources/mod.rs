mod demo;
mod factory;
mod spoonacular;

pub use demo::DemoSource;
pub use factory::SourceFactory;
pub use spoonacular::SpoonacularSource;

use async_trait::async_trait;

use crate::error::FinderError;
use crate::ingredients::IngredientSet;
use crate::model::{RecipeDetail, RecipeSummary};

/// Unified trait for everything that can answer a recipe search
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "demo", "spoonacular")
    fn source_name(&self) -> &str;

    /// Ranked recipes that use the given ingredients
    async fn find_by_ingredients(
        &self,
        ingredients: &IngredientSet,
    ) -> Result<Vec<RecipeSummary>, FinderError>;

    /// Full ingredient list and instructions for a recipe
    async fn information(&self, recipe_id: u64) -> Result<RecipeDetail, FinderError>;
}
