use async_trait::async_trait;
use log::info;

use crate::catalog::Catalog;
use crate::error::FinderError;
use crate::ingredients::IngredientSet;
use crate::matcher;
use crate::model::{RecipeDetail, RecipeSummary};
use crate::sources::RecipeSource;

/// Offline source backed by the compiled-in catalog.
pub struct DemoSource {
    catalog: Catalog,
}

impl DemoSource {
    pub fn new() -> Result<Self, FinderError> {
        Ok(Self::with_catalog(Catalog::demo()?))
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        DemoSource { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[async_trait]
impl RecipeSource for DemoSource {
    fn source_name(&self) -> &str {
        "demo"
    }

    async fn find_by_ingredients(
        &self,
        ingredients: &IngredientSet,
    ) -> Result<Vec<RecipeSummary>, FinderError> {
        let results: Vec<RecipeSummary> = matcher::search(ingredients, self.catalog.entries())
            .into_iter()
            .map(|scored| scored.entry.to_summary(scored.match_score))
            .collect();

        info!("Demo catalog matched {} recipes", results.len());
        Ok(results)
    }

    async fn information(&self, recipe_id: u64) -> Result<RecipeDetail, FinderError> {
        Ok(self.catalog.details(recipe_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_ingredients() {
        let source = DemoSource::new().unwrap();
        let mut ingredients = IngredientSet::new();
        ingredients.add("chicken").unwrap();
        ingredients.add("rice").unwrap();
        ingredients.add("vegetables").unwrap();

        let results = source.find_by_ingredients(&ingredients).await.unwrap();
        assert_eq!(results[0].title, "Classic Chicken Stir Fry");
        assert_eq!(results[0].match_score, 3);
        assert_eq!(results[0].ready_in_minutes(), 25);
        assert_eq!(results[0].missing_summary(), "soy sauce, fresh ginger, sesame oil");
    }

    #[tokio::test]
    async fn test_information_uses_catalog_details() {
        let source = DemoSource::new().unwrap();
        let mut ingredients = IngredientSet::new();
        ingredients.add("pasta").unwrap();

        let results = source.find_by_ingredients(&ingredients).await.unwrap();
        let detail = source.information(results[0].id).await.unwrap();
        assert_eq!(detail, source.catalog().details(1003));
    }

    #[test]
    fn test_source_name() {
        let source = DemoSource::new().unwrap();
        assert_eq!(source.source_name(), "demo");
    }
}
