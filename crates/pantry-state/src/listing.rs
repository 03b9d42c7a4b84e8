use pantry_core::entities::Recipe;

use crate::servings::pluralize;

/// Recipes ordered by name, ignoring case. Equal names keep their order.
#[must_use]
pub fn sorted_by_name(mut recipes: Vec<Recipe>) -> Vec<Recipe> {
    recipes.sort_by_cached_key(|recipe| recipe.name.to_lowercase());
    recipes
}

/// `"4 servings · 3 ingredients"`; the ingredient part is left off when empty.
#[must_use]
pub fn recipe_summary(recipe: &Recipe) -> String {
    let servings = pluralize(recipe.servings, "serving");
    let count = recipe.ingredient_quantities.len();
    if count == 0 {
        servings
    } else {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        format!("{servings} · {}", pluralize(count, "ingredient"))
    }
}
