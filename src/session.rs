use std::time::Duration;

use log::{debug, error, info};

use crate::config::FinderConfig;
use crate::error::{FinderError, ValidationError};
use crate::ingredients::IngredientSet;
use crate::model::{RecipeDetail, RecipeSummary};
use crate::sources::{DemoSource, RecipeSource, SourceFactory};

/// One user's recipe search session.
///
/// Owns the ingredient list being edited and the most recent result page.
/// Create one with [`RecipeFinder::builder`].
pub struct RecipeFinder {
    ingredients: IngredientSet,
    source: Box<dyn RecipeSource>,
    results: Vec<RecipeSummary>,
}

impl RecipeFinder {
    /// Creates a new builder for a search session
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder().demo();
    /// ```
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }

    pub fn with_source(source: Box<dyn RecipeSource>) -> Self {
        RecipeFinder {
            ingredients: IngredientSet::new(),
            source,
            results: Vec::new(),
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.source_name()
    }

    pub fn ingredients(&self) -> &IngredientSet {
        &self.ingredients
    }

    /// Add an ingredient to the list. On error the list is unchanged.
    pub fn add_ingredient(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.ingredients.add(raw).inspect_err(|e| {
            debug!("Rejected ingredient {:?}: {}", raw, e);
        })
    }

    pub fn remove_ingredient(&mut self, ingredient: &str) {
        self.ingredients.remove(ingredient);
    }

    /// Whether a search can run (at least one ingredient)
    pub fn can_search(&self) -> bool {
        !self.ingredients.is_empty()
    }

    /// Search for recipes using the current ingredient list.
    ///
    /// The previous result page is replaced. On failure it is cleared and
    /// the error returned; an empty page is a valid outcome.
    pub async fn search(&mut self) -> Result<&[RecipeSummary], FinderError> {
        if !self.can_search() {
            return Err(FinderError::NoIngredients);
        }

        info!(
            "Searching {} for [{}]",
            self.source.source_name(),
            self.ingredients.to_query()
        );

        match self.source.find_by_ingredients(&self.ingredients).await {
            Ok(results) => {
                self.results = results;
                Ok(&self.results)
            }
            Err(e) => {
                error!("Recipe search failed: {}", e);
                self.results.clear();
                Err(e)
            }
        }
    }

    /// The most recent result page
    pub fn results(&self) -> &[RecipeSummary] {
        &self.results
    }

    /// Full details of the result at `index` on the current page
    pub async fn details(&self, index: usize) -> Result<RecipeDetail, FinderError> {
        let recipe = self
            .results
            .get(index)
            .ok_or(FinderError::UnknownResult(index))?;

        self.source.information(recipe.id).await
    }

    /// Full details of any recipe the source knows by id
    pub async fn details_by_id(&self, recipe_id: u64) -> Result<RecipeDetail, FinderError> {
        self.source.information(recipe_id).await
    }
}

/// Builder for configuring a [`RecipeFinder`] session
#[derive(Default)]
pub struct RecipeFinderBuilder {
    config: Option<FinderConfig>,
    source: Option<Box<dyn RecipeSource>>,
    demo: bool,
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl RecipeFinderBuilder {
    /// Use this configuration instead of loading one from file and environment
    pub fn config(mut self, config: FinderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Always use the compiled-in demo catalog
    pub fn demo(mut self) -> Self {
        self.demo = true;
        self
    }

    /// Use a custom recipe source
    pub fn source(mut self, source: Box<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the API key for the recipe API
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder().api_key("your-api-key");
    /// ```
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the session
    ///
    /// # Errors
    /// Returns `FinderError` if:
    /// - `demo()` and `source()` are both set
    /// - the configuration cannot be loaded
    /// - the chosen source fails to initialize
    pub fn build(self) -> Result<RecipeFinder, FinderError> {
        let source: Box<dyn RecipeSource> = match (self.source, self.demo) {
            (Some(_), true) => {
                return Err(FinderError::BuilderError(
                    "Cannot combine demo() with a custom source".to_string(),
                ))
            }
            (Some(source), false) => source,
            (None, true) => Box::new(DemoSource::new()?),
            (None, false) => {
                let mut config = match self.config {
                    Some(config) => config,
                    None => FinderConfig::load()?,
                };
                if let Some(key) = self.api_key {
                    config.api_key = Some(key);
                }
                if let Some(url) = self.base_url {
                    config.base_url = url;
                }
                if let Some(timeout) = self.timeout {
                    config.timeout = timeout.as_secs();
                }
                SourceFactory::from_config(&config)?
            }
        };

        Ok(RecipeFinder::with_source(source))
    }
}
