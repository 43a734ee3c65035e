use std::time::Duration;

use thiserror::Error;

/// How long a front end should keep a validation notice on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(4);

/// Rejections raised while editing an ingredient list.
///
/// None of these are fatal: the list is left untouched and the message is
/// meant to be shown to the user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Blank (or whitespace only) ingredient submitted
    #[error("Please enter an ingredient")]
    EmptyInput,

    /// Ingredient is already in the list after normalization
    #[error("Ingredient already added")]
    DuplicateIngredient,

    /// The list already holds the maximum number of ingredients
    #[error("Maximum {} ingredients allowed", crate::ingredients::MAX_INGREDIENTS)]
    CapacityExceeded,
}

/// Errors that can occur while searching for recipes
#[derive(Error, Debug)]
pub enum FinderError {
    /// Ingredient list rejected an edit
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A search was requested with no ingredients in the list
    #[error("Add at least one ingredient before searching")]
    NoIngredients,

    /// Details were requested for a result that is not on the current page
    #[error("No recipe at result position {0}")]
    UnknownResult(usize),

    /// Failed to reach the recipe API
    #[error("Failed to fetch recipes: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The recipe API answered with a non-success status
    #[error("Recipe API returned {status} for {url}")]
    StatusError { status: u16, url: String },

    /// The recipe API answered with a body we could not decode
    #[error("Failed to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Demo catalog failed load-time validation
    #[error("Invalid recipe catalog: {0}")]
    CatalogError(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
