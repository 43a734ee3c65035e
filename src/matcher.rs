//! Ranking of catalog entries against the user's ingredients.

use log::debug;

use crate::catalog::CatalogEntry;
use crate::ingredients::IngredientSet;

/// Maximum number of recipes on a result page.
pub const MAX_RESULTS: usize = 8;

/// A catalog entry together with how many of the user's ingredients it uses.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecipe<'a> {
    pub entry: &'a CatalogEntry,
    pub match_score: usize,
}

/// Number of ingredients in `ingredients` that `entry` is tagged with.
pub fn match_score(ingredients: &IngredientSet, entry: &CatalogEntry) -> usize {
    ingredients
        .iter()
        .filter(|ingredient| entry.uses(ingredient))
        .count()
}

/// Score, filter, rank and truncate `catalog` for `ingredients`.
///
/// Entries with no overlap are dropped, except that an empty ingredient set
/// keeps every entry (all scored zero). Ranking is by score, highest first;
/// the sort is stable so equal scores keep catalog order. At most
/// [`MAX_RESULTS`] entries are returned.
pub fn search<'a>(ingredients: &IngredientSet, catalog: &'a [CatalogEntry]) -> Vec<ScoredRecipe<'a>> {
    let match_everything = ingredients.is_empty();

    let mut scored: Vec<ScoredRecipe<'a>> = catalog
        .iter()
        .map(|entry| ScoredRecipe {
            entry,
            match_score: match_score(ingredients, entry),
        })
        .filter(|recipe| match_everything || recipe.match_score > 0)
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(MAX_RESULTS);

    debug!(
        "Matched {} of {} catalog recipes for [{}]",
        scored.len(),
        catalog.len(),
        ingredients.to_query()
    );

    scored
}
