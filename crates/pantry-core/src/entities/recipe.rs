use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

use super::{Id, Ingredient, Unit};

/// An ingredient paired with a quantity and unit, as used within a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientQuantity {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: f64,
    pub ingredient: Ingredient,
    pub unit: Unit,
}

impl IngredientQuantity {
    #[must_use]
    pub const fn pending(ingredient: Ingredient, unit: Unit, quantity: f64) -> Self {
        Self {
            id: None,
            quantity,
            ingredient,
            unit,
        }
    }
}

/// A named dish with method text, serving count, and ingredient quantities.
///
/// `ingredient_quantities` keeps insertion order and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub id: Option<Id>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub servings: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredient_quantities: Vec<IngredientQuantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}
