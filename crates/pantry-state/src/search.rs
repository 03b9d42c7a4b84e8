//! Ingredient name filter backing the selection widget.

use pantry_core::entities::Ingredient;

/// Ingredients whose name contains `query`, ignoring case, in input order.
///
/// An empty query matches nothing. The query is used as typed: whitespace is
/// part of the substring.
#[must_use]
pub fn search_ingredients(query: &str, ingredients: &[Ingredient]) -> Vec<Ingredient> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    ingredients
        .iter()
        .filter(|ingredient| ingredient.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
