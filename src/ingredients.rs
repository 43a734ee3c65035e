use serde::Serialize;

use crate::error::ValidationError;

/// Maximum number of ingredients a list can hold.
pub const MAX_INGREDIENTS: usize = 10;

/// Normalize raw user input into an ingredient token (trimmed, lower-cased).
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Ordered, deduplicated list of normalized ingredient names.
///
/// Insertion order is preserved and the list never holds more than
/// [`MAX_INGREDIENTS`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IngredientSet {
    items: Vec<String>,
}

impl IngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `raw` and append it to the end of the list.
    ///
    /// # Errors
    /// - [`ValidationError::EmptyInput`] if nothing is left after trimming
    /// - [`ValidationError::DuplicateIngredient`] if the normalized value is already present
    /// - [`ValidationError::CapacityExceeded`] if the list is full
    pub fn add(&mut self, raw: &str) -> Result<(), ValidationError> {
        let ingredient = normalize(raw);

        if ingredient.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        if self.contains(&ingredient) {
            return Err(ValidationError::DuplicateIngredient);
        }
        if self.items.len() >= MAX_INGREDIENTS {
            return Err(ValidationError::CapacityExceeded);
        }

        self.items.push(ingredient);
        Ok(())
    }

    /// Remove every entry equal to `ingredient` after normalization. Absent values are ignored.
    pub fn remove(&mut self, ingredient: &str) {
        let ingredient = normalize(ingredient);
        self.items.retain(|item| *item != ingredient);
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        let ingredient = normalize(ingredient);
        self.items.iter().any(|item| *item == ingredient)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Comma-joined form used as the API query value.
    pub fn to_query(&self) -> String {
        self.items.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_normalizes() {
        let mut set = IngredientSet::new();
        set.add("  Chicken ").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["chicken"]);
    }

    #[test]
    fn test_add_empty_input() {
        let mut set = IngredientSet::new();
        assert_eq!(set.add(""), Err(ValidationError::EmptyInput));
        assert_eq!(set.add("   \t"), Err(ValidationError::EmptyInput));
        assert!(set.is_empty());
    }

    #[test]
    fn test_add_duplicate_after_normalization() {
        let mut set = IngredientSet::new();
        set.add("a").unwrap();
        assert_eq!(set.add("  A "), Err(ValidationError::DuplicateIngredient));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_capacity_is_never_exceeded() {
        let mut set = IngredientSet::new();
        for i in 0..MAX_INGREDIENTS {
            set.add(&format!("item{}", i)).unwrap();
        }
        assert_eq!(set.add("one more"), Err(ValidationError::CapacityExceeded));
        assert_eq!(set.len(), MAX_INGREDIENTS);
    }

    #[test]
    fn test_duplicate_wins_over_capacity() {
        let mut set = IngredientSet::new();
        for i in 0..MAX_INGREDIENTS {
            set.add(&format!("item{}", i)).unwrap();
        }
        assert_eq!(set.add("ITEM0"), Err(ValidationError::DuplicateIngredient));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = IngredientSet::new();
        for name in ["rice", "chicken", "garlic"] {
            set.add(name).unwrap();
        }
        assert_eq!(set.to_query(), "rice,chicken,garlic");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut set = IngredientSet::new();
        set.add("rice").unwrap();
        set.add("eggs").unwrap();

        set.remove("Rice ");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["eggs"]);

        set.remove("rice");
        set.remove("tofu");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_removed_slot_can_be_reused() {
        let mut set = IngredientSet::new();
        for i in 0..MAX_INGREDIENTS {
            set.add(&format!("item{}", i)).unwrap();
        }
        set.remove("item3");
        assert!(set.add("rice").is_ok());
        assert_eq!(set.len(), MAX_INGREDIENTS);
    }
}
