//! Plain-text views of ingredients, result pages and recipe details.

use std::fmt::Write;

use crate::ingredients::IngredientSet;
use crate::model::{results_label, RecipeDetail, RecipeSummary};

/// Upper-case the first character ("chicken" -> "Chicken")
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Ingredient tags on one line, e.g. `[Chicken] [Rice]`
pub fn ingredient_tags(ingredients: &IngredientSet) -> String {
    ingredients
        .iter()
        .map(|ingredient| format!("[{}]", capitalize_first(ingredient)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn meta_line(ready_in_minutes: u32, servings: u32, health_score: Option<u32>, unit: &str) -> String {
    let mut line = format!("{} {} | {} servings", ready_in_minutes, unit, servings);
    if let Some(score) = health_score {
        let _ = write!(line, " | {}% healthy", score);
    }
    line
}

/// Numbered result cards under a "N recipes found" header.
///
/// An empty page renders the empty-state message instead.
pub fn results(recipes: &[RecipeSummary]) -> String {
    if recipes.is_empty() {
        return "No recipes found. Try different ingredients.".to_string();
    }

    let mut out = results_label(recipes.len());
    for (index, recipe) in recipes.iter().enumerate() {
        let _ = write!(
            out,
            "\n\n{}. {}\n   {}\n   Missing ingredients: {}",
            index + 1,
            recipe.title,
            meta_line(
                recipe.ready_in_minutes(),
                recipe.servings(),
                recipe.health_score(),
                "min"
            ),
            recipe.missing_summary()
        );
    }
    out
}

pub fn detail(recipe: &RecipeDetail) -> String {
    let mut out = format!(
        "{}\n{}\n{}\n\nIngredients\n",
        recipe.title,
        recipe.image_or_placeholder(),
        meta_line(
            recipe.ready_in_minutes(),
            recipe.servings(),
            recipe.health_score(),
            "minutes"
        )
    );
    for line in recipe.ingredient_lines() {
        let _ = writeln!(out, "  - {}", line);
    }
    let _ = write!(out, "\nInstructions\n{}", recipe.instructions_text());
    out
}
