use async_trait::async_trait;
use log::{debug, error, info};

use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::fetcher::JsonFetcher;
use crate::ingredients::IngredientSet;
use crate::model::{RecipeDetail, RecipeSummary};
use crate::sources::RecipeSource;

/// Live source backed by the Spoonacular recipe API
pub struct SpoonacularSource {
    fetcher: JsonFetcher,
    api_key: String,
    base_url: String,
    number: u32,
    ranking: u8,
    ignore_pantry: bool,
}

impl SpoonacularSource {
    /// Create a new Spoonacular source from configuration
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        let api_key = config.api_key().ok_or_else(|| {
            FinderError::BuilderError("Spoonacular API key not configured".to_string())
        })?;

        Ok(SpoonacularSource {
            fetcher: JsonFetcher::new(Some(config.timeout()))?,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            number: config.number,
            ranking: config.ranking,
            ignore_pantry: config.ignore_pantry,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, FinderError> {
        let config = FinderConfig {
            api_key: Some(api_key),
            base_url,
            ..Default::default()
        };
        Self::new(&config)
    }
}

#[async_trait]
impl RecipeSource for SpoonacularSource {
    fn source_name(&self) -> &str {
        "spoonacular"
    }

    async fn find_by_ingredients(
        &self,
        ingredients: &IngredientSet,
    ) -> Result<Vec<RecipeSummary>, FinderError> {
        let url = format!("{}/findByIngredients", self.base_url);
        let query = [
            ("apiKey", self.api_key.clone()),
            ("ingredients", ingredients.to_query()),
            ("number", self.number.to_string()),
            ("ranking", self.ranking.to_string()),
            ("ignorePantry", self.ignore_pantry.to_string()),
        ];

        let recipes: Vec<RecipeSummary> = self
            .fetcher
            .get_json(&url, &query)
            .await
            .inspect_err(|e| error!("Error fetching recipes: {}", e))?;

        info!("Spoonacular returned {} recipes", recipes.len());
        Ok(recipes)
    }

    async fn information(&self, recipe_id: u64) -> Result<RecipeDetail, FinderError> {
        let url = format!("{}/{}/information", self.base_url, recipe_id);
        debug!("Fetching details for recipe {}", recipe_id);

        self.fetcher
            .get_json(&url, &[("apiKey", self.api_key.clone())])
            .await
            .inspect_err(|e| error!("Error fetching recipe details: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_find_by_ingredients() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/findByIngredients")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("apiKey".into(), "fake_api_key".into()),
                Matcher::UrlEncoded("ingredients".into(), "chicken,rice".into()),
                Matcher::UrlEncoded("number".into(), "12".into()),
                Matcher::UrlEncoded("ranking".into(), "1".into()),
                Matcher::UrlEncoded("ignorePantry".into(), "true".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{
                    "id": 640803,
                    "title": "Chicken Fried Rice",
                    "image": "https://img.spoonacular.com/recipes/640803-312x231.jpg",
                    "usedIngredientCount": 2,
                    "missedIngredientCount": 1,
                    "missedIngredients": [{"name": "scallions"}]
                }]"#,
            )
            .create_async()
            .await;

        let source =
            SpoonacularSource::with_base_url("fake_api_key".to_string(), server.url()).unwrap();
        let mut ingredients = IngredientSet::new();
        ingredients.add("chicken").unwrap();
        ingredients.add("rice").unwrap();

        let results = source.find_by_ingredients(&ingredients).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Chicken Fried Rice");
        assert_eq!(results[0].match_score, 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_find_by_ingredients_api_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/findByIngredients")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"status": "failure", "code": 401}"#)
            .create_async()
            .await;

        let source =
            SpoonacularSource::with_base_url("bad_key".to_string(), server.url()).unwrap();
        let mut ingredients = IngredientSet::new();
        ingredients.add("rice").unwrap();

        let result = source.find_by_ingredients(&ingredients).await;
        assert!(matches!(
            result,
            Err(FinderError::StatusError { status: 401, .. })
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_information() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/640803/information")
            .match_query(Matcher::UrlEncoded("apiKey".into(), "fake_api_key".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "id": 640803,
                    "title": "Chicken Fried Rice",
                    "readyInMinutes": 25,
                    "servings": 2,
                    "healthScore": 31,
                    "extendedIngredients": [{"original": "2 cups rice", "name": "rice"}],
                    "instructions": "Fry everything."
                }"#,
            )
            .create_async()
            .await;

        let source =
            SpoonacularSource::with_base_url("fake_api_key".to_string(), server.url()).unwrap();
        let detail = source.information(640803).await.unwrap();

        assert_eq!(detail.servings(), 2);
        assert_eq!(detail.health_score(), Some(31));
        assert_eq!(detail.instructions_text(), "Fry everything.");
        mock.assert_async().await;
    }

    #[test]
    fn test_requires_api_key() {
        let config = FinderConfig {
            api_key: Some(crate::config::PLACEHOLDER_API_KEY.to_string()),
            ..Default::default()
        };
        assert!(SpoonacularSource::new(&config).is_err());
    }

    #[test]
    fn test_source_name() {
        let source =
            SpoonacularSource::with_base_url("k".to_string(), "http://localhost".to_string())
                .unwrap();
        assert_eq!(source.source_name(), "spoonacular");
    }
}
