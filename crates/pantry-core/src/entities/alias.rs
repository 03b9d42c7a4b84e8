use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Id;

/// Alternate text mapped to an ingredient and unit, used when resolving
/// imported ingredient lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientAlias {
    pub id: Id,
    pub alias_text: String,
    pub ingredient_id: Id,
    pub unit_id: Id,
}

/// Request body for creating an alias. The server answers `204 No Content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewIngredientAlias {
    pub alias_text: String,
    pub ingredient_id: Id,
    pub unit_id: Id,
}
