//! Compiled-in demo catalog.
//!
//! Used in place of the live recipe API when no API key is configured. The
//! catalog is parsed and validated once, when it is loaded; every entry
//! afterwards carries concrete values for its optional display fields.

use std::collections::{HashMap, HashSet};

use log::debug;
use serde::Deserialize;

use crate::error::FinderError;
use crate::ingredients::normalize;
use crate::model::{
    DetailIngredient, MissedIngredient, RecipeDetail, RecipeSummary, DEFAULT_READY_IN_MINUTES,
    DEFAULT_SERVINGS,
};

const DEMO_CATALOG: &str = include_str!("../data/demo_catalog.json");

const PLACEHOLDER_TITLE: &str = "Demo Recipe";
const PLACEHOLDER_INGREDIENTS: [&str; 5] = [
    "2 cups of your main ingredients",
    "1 tbsp olive oil",
    "1 clove garlic, minced",
    "Salt and pepper to taste",
    "Fresh herbs for garnish",
];
const PLACEHOLDER_INSTRUCTIONS: &str = "1. Prepare and measure all ingredients.\n\
2. Heat the olive oil in a pan over medium heat.\n\
3. Add the garlic and main ingredients and cook until done.\n\
4. Season with salt and pepper.\n\
5. Garnish with fresh herbs and serve.";

/// A candidate recipe in the demo catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: u64,
    pub title: String,
    pub image: String,
    #[serde(default = "default_ready_in_minutes")]
    pub ready_in_minutes: u32,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub health_score: Option<u32>,
    /// Ingredients this recipe is associated with, used for matching
    #[serde(rename = "cookingTagIngredients")]
    pub tags: Vec<String>,
    /// Display list, independent of what the user entered
    #[serde(default)]
    pub missed_ingredients: Vec<String>,
}

impl CatalogEntry {
    pub fn uses(&self, ingredient: &str) -> bool {
        self.tags.iter().any(|tag| tag == ingredient)
    }

    /// Build the result-page view of this entry.
    pub fn to_summary(&self, match_score: usize) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            title: self.title.clone(),
            image: Some(self.image.clone()),
            ready_in_minutes: Some(self.ready_in_minutes),
            servings: Some(self.servings),
            health_score: self.health_score,
            match_score,
            missed_ingredients: self
                .missed_ingredients
                .iter()
                .map(|name| MissedIngredient { name: name.clone() })
                .collect(),
        }
    }
}

fn default_ready_in_minutes() -> u32 {
    DEFAULT_READY_IN_MINUTES
}

fn default_servings() -> u32 {
    DEFAULT_SERVINGS
}

#[derive(Deserialize)]
struct RawCatalog {
    recipes: Vec<CatalogEntry>,
    #[serde(default)]
    details: Vec<RecipeDetail>,
}

/// Immutable set of candidate recipes plus curated detail records.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    details: HashMap<u64, RecipeDetail>,
}

impl Catalog {
    /// Load the catalog bundled with the crate.
    pub fn demo() -> Result<Self, FinderError> {
        Self::from_json(DEMO_CATALOG)
    }

    /// Parse and validate a catalog document.
    ///
    /// Tags are normalized the same way user input is. Fails when ids
    /// repeat, a title is blank, or a detail record has no matching entry.
    pub fn from_json(json: &str) -> Result<Self, FinderError> {
        let raw: RawCatalog = serde_json::from_str(json)?;

        let mut ids = HashSet::new();
        let mut entries = Vec::with_capacity(raw.recipes.len());
        for mut entry in raw.recipes {
            if !ids.insert(entry.id) {
                return Err(FinderError::CatalogError(format!(
                    "duplicate recipe id {}",
                    entry.id
                )));
            }
            if entry.title.trim().is_empty() {
                return Err(FinderError::CatalogError(format!(
                    "recipe {} has no title",
                    entry.id
                )));
            }

            let mut seen = HashSet::new();
            entry.tags = entry
                .tags
                .iter()
                .map(|tag| normalize(tag))
                .filter(|tag| !tag.is_empty() && seen.insert(tag.clone()))
                .collect();

            entries.push(entry);
        }

        let mut details = HashMap::new();
        for detail in raw.details {
            if !ids.contains(&detail.id) {
                return Err(FinderError::CatalogError(format!(
                    "detail record {} has no catalog entry",
                    detail.id
                )));
            }
            if details.insert(detail.id, detail).is_some() {
                return Err(FinderError::CatalogError(
                    "duplicate detail record".to_string(),
                ));
            }
        }

        debug!(
            "Loaded catalog with {} recipes and {} curated details",
            entries.len(),
            details.len()
        );

        Ok(Catalog { entries, details })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: u64) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn has_curated_details(&self, id: u64) -> bool {
        self.details.contains_key(&id)
    }

    /// Detail record for `id`.
    ///
    /// Returns the curated record when one exists. Any other id gets a
    /// placeholder with boilerplate ingredients and instructions, carrying
    /// the entry's title and metadata when the id is in the catalog.
    pub fn details(&self, id: u64) -> RecipeDetail {
        if let Some(detail) = self.details.get(&id) {
            return detail.clone();
        }

        debug!("No curated details for recipe {}, using placeholder", id);
        let entry = self.get(id);

        RecipeDetail {
            id,
            title: entry
                .map(|entry| entry.title.clone())
                .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string()),
            image: entry.map(|entry| entry.image.clone()),
            ready_in_minutes: entry.map(|entry| entry.ready_in_minutes),
            servings: entry.map(|entry| entry.servings),
            health_score: entry.and_then(|entry| entry.health_score),
            extended_ingredients: PLACEHOLDER_INGREDIENTS
                .iter()
                .map(|line| DetailIngredient::line(*line))
                .collect(),
            instructions: Some(PLACEHOLDER_INSTRUCTIONS.to_string()),
            summary: None,
        }
    }
}
