use serde::{Deserialize, Serialize};

/// Ready time shown when a recipe does not report one
pub const DEFAULT_READY_IN_MINUTES: u32 = 30;
/// Servings shown when a recipe does not report them
pub const DEFAULT_SERVINGS: u32 = 4;

pub const PLACEHOLDER_CARD_IMAGE: &str = "https://via.placeholder.com/400x200?text=No+Image";
pub const PLACEHOLDER_DETAIL_IMAGE: &str =
    "https://via.placeholder.com/600x250?text=Recipe+Image";

const INSTRUCTIONS_UNAVAILABLE: &str = "Instructions not available for this demo recipe.";

/// A named ingredient attached to a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedIngredient {
    pub name: String,
}

/// One entry of a search result page.
///
/// Deserializes from the recipe API's `findByIngredients` payload; demo
/// results are built from the compiled-in catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub health_score: Option<u32>,
    /// Number of the user's ingredients this recipe uses
    #[serde(default, alias = "usedIngredientCount")]
    pub match_score: usize,
    #[serde(default)]
    pub missed_ingredients: Vec<MissedIngredient>,
}

impl RecipeSummary {
    pub fn ready_in_minutes(&self) -> u32 {
        self.ready_in_minutes.unwrap_or(DEFAULT_READY_IN_MINUTES)
    }

    pub fn servings(&self) -> u32 {
        self.servings.unwrap_or(DEFAULT_SERVINGS)
    }

    /// Health score, hidden when absent or zero
    pub fn health_score(&self) -> Option<u32> {
        self.health_score.filter(|score| *score > 0)
    }

    pub fn image_or_placeholder(&self) -> &str {
        image_or(&self.image, PLACEHOLDER_CARD_IMAGE)
    }

    /// Up to three missing ingredient names, with a trailing ellipsis when more exist.
    pub fn missing_summary(&self) -> String {
        if self.missed_ingredients.is_empty() {
            return "None".to_string();
        }

        let names: Vec<&str> = self
            .missed_ingredients
            .iter()
            .take(3)
            .map(|ingredient| ingredient.name.as_str())
            .collect();
        let more = if self.missed_ingredients.len() > 3 {
            "..."
        } else {
            ""
        };

        format!("{}{}", names.join(", "), more)
    }
}

/// An ingredient line in a recipe's detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailIngredient {
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl DetailIngredient {
    pub fn line(line: impl Into<String>) -> Self {
        Self {
            original: Some(line.into()),
            name: None,
        }
    }

    /// Display text: the original line, else the bare name
    pub fn text(&self) -> &str {
        self.original
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }
}

/// Full recipe with ingredient list and instructions.
///
/// Deserializes from the recipe API's `information` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub health_score: Option<u32>,
    #[serde(default)]
    pub extended_ingredients: Vec<DetailIngredient>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl RecipeDetail {
    pub fn ready_in_minutes(&self) -> u32 {
        self.ready_in_minutes.unwrap_or(DEFAULT_READY_IN_MINUTES)
    }

    pub fn servings(&self) -> u32 {
        self.servings.unwrap_or(DEFAULT_SERVINGS)
    }

    pub fn health_score(&self) -> Option<u32> {
        self.health_score.filter(|score| *score > 0)
    }

    pub fn image_or_placeholder(&self) -> &str {
        image_or(&self.image, PLACEHOLDER_DETAIL_IMAGE)
    }

    pub fn ingredient_lines(&self) -> impl Iterator<Item = &str> {
        self.extended_ingredients
            .iter()
            .map(DetailIngredient::text)
            .filter(|line| !line.is_empty())
    }

    /// Instructions, else the summary, else a fixed notice
    pub fn instructions_text(&self) -> &str {
        non_blank(&self.instructions)
            .or_else(|| non_blank(&self.summary))
            .unwrap_or(INSTRUCTIONS_UNAVAILABLE)
    }
}

/// "N recipe(s) found" label for a result page
pub fn results_label(count: usize) -> String {
    format!(
        "{} recipe{} found",
        count,
        if count == 1 { "" } else { "s" }
    )
}

fn image_or<'a>(image: &'a Option<String>, placeholder: &'a str) -> &'a str {
    non_blank(image).unwrap_or(placeholder)
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}
