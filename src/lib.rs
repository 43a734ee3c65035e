pub mod catalog;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod ingredients;
pub mod matcher;
pub mod model;
pub mod render;
pub mod session;
pub mod sources;

pub use catalog::{Catalog, CatalogEntry};
pub use crate::config::FinderConfig;
pub use error::{FinderError, ValidationError, NOTICE_DURATION};
pub use ingredients::{IngredientSet, MAX_INGREDIENTS};
pub use matcher::{ScoredRecipe, MAX_RESULTS};
pub use model::{DetailIngredient, MissedIngredient, RecipeDetail, RecipeSummary};
pub use session::{RecipeFinder, RecipeFinderBuilder};
pub use sources::RecipeSource;

/// Search recipes for a list of ingredients in one call.
///
/// Uses configuration from `recipe_finder.toml` and `RECIPE_FINDER__*`
/// environment variables; without an API key the demo catalog answers.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipes = recipe_finder::search_recipes(&["chicken", "rice"]).await?;
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(ingredients: &[&str]) -> Result<Vec<RecipeSummary>, FinderError> {
    let mut finder = RecipeFinder::builder().build()?;
    for ingredient in ingredients {
        finder.add_ingredient(ingredient)?;
    }

    Ok(finder.search().await?.to_vec())
}

/// Detail record for `recipe_id` from the demo catalog.
///
/// Ids without a curated record get a placeholder; this never fails once
/// the catalog has loaded.
pub fn demo_details(recipe_id: u64) -> Result<RecipeDetail, FinderError> {
    Ok(Catalog::demo()?.details(recipe_id))
}
