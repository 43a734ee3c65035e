use log::info;

use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::sources::{DemoSource, RecipeSource, SpoonacularSource};

pub struct SourceFactory;

impl SourceFactory {
    /// Pick the recipe source for a configuration.
    ///
    /// The live API is used when a real key is configured, the demo
    /// catalog otherwise.
    pub fn from_config(config: &FinderConfig) -> Result<Box<dyn RecipeSource>, FinderError> {
        if config.has_api_key() {
            info!("Using Spoonacular API at {}", config.base_url);
            Ok(Box::new(SpoonacularSource::new(config)?))
        } else {
            info!("No API key configured, using demo recipes");
            Ok(Box::new(DemoSource::new()?))
        }
    }
}
