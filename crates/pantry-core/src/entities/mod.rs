//! Entity structs for all Pantry domain objects.
//!
//! Each struct mirrors one JSON shape exchanged with the recipe API. Field
//! names are `camelCase` on the wire. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema`.

mod alias;
mod import;
mod ingredient;
mod page;
mod recipe;
mod unit;

pub use alias::{IngredientAlias, NewIngredientAlias};
pub use import::{ExtractionSource, ImportedIngredientLine, RecipeImportDraft};
pub use ingredient::Ingredient;
pub use page::PageResponse;
pub use recipe::{IngredientQuantity, Recipe};
pub use unit::Unit;

/// Server-assigned identifier. `None` on an entity means "not yet persisted".
pub type Id = i64;
