//! JSON Schemas for the wire types, looked up by name.
//!
//! Backs `pantry schema <type>` and lets tests validate payloads against the
//! same schemas editors and other tooling see.

use schemars::schema_for;

use crate::entities::{
    Ingredient, IngredientAlias, IngredientQuantity, NewIngredientAlias, PageResponse, Recipe,
    RecipeImportDraft, Unit,
};

/// Names accepted by [`schema_for_name`], in display order.
pub const SCHEMA_NAMES: &[&str] = &[
    "recipe",
    "ingredient_quantity",
    "ingredient",
    "unit",
    "ingredient_alias",
    "new_ingredient_alias",
    "ingredient_page",
    "recipe_import_draft",
];

/// The JSON Schema for `name`, or `None` for an unknown name.
///
/// Accepts `-` in place of `_` (`recipe-import-draft`).
///
/// # Errors
///
/// Returns the `serde_json` error if a generated schema fails to convert.
pub fn schema_for_name(name: &str) -> Result<Option<serde_json::Value>, serde_json::Error> {
    let schema = match name.trim().replace('-', "_").as_str() {
        "recipe" => schema_for!(Recipe),
        "ingredient_quantity" => schema_for!(IngredientQuantity),
        "ingredient" => schema_for!(Ingredient),
        "unit" => schema_for!(Unit),
        "ingredient_alias" => schema_for!(IngredientAlias),
        "new_ingredient_alias" => schema_for!(NewIngredientAlias),
        "ingredient_page" => schema_for!(PageResponse<Ingredient>),
        "recipe_import_draft" => schema_for!(RecipeImportDraft),
        _ => return Ok(None),
    };
    serde_json::to_value(schema).map(Some)
}
