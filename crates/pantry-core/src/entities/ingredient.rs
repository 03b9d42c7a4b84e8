use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Id, Unit};

/// A named foodstuff with a default unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default)]
    pub id: Option<Id>,
    pub name: String,
    #[serde(default)]
    pub default_unit: Option<Unit>,
}

impl Ingredient {
    /// A new, not-yet-persisted ingredient.
    #[must_use]
    pub fn pending(name: impl Into<String>, default_unit: Option<Unit>) -> Self {
        Self {
            id: None,
            name: name.into(),
            default_unit,
        }
    }

    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
