use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

use super::{Ingredient, Unit};

/// Which extractor produced an import draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtractionSource {
    /// Structured `schema.org/Recipe` data embedded in the page.
    SchemaOrg,
    /// Language-model extraction from page text.
    Llm,
    /// Language-model extraction from a photo.
    Vision,
}

/// One ingredient line of an import draft.
///
/// A line is *resolved* when the server matched it to a known ingredient;
/// otherwise only the raw text and parsed hints are available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportedIngredientLine {
    #[serde(default, deserialize_with = "null_as_default")]
    pub raw_text: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub ingredient_name_hint: Option<String>,
    #[serde(default)]
    pub unit_name_hint: Option<String>,
    #[serde(default)]
    pub resolved_ingredient: Option<Ingredient>,
    #[serde(default)]
    pub resolved_unit: Option<Unit>,
}

impl ImportedIngredientLine {
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.resolved_ingredient.is_some()
    }
}

/// A transient, unsaved recipe extracted from an import source.
///
/// Never persisted directly: it seeds the recipe form for user review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeImportDraft {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub servings: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(default)]
    pub source_url: Option<String>,
    pub extraction_source: ExtractionSource,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredient_lines: Vec<ImportedIngredientLine>,
}
