use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::{base_factor, default_base_factor};

use super::Id;

/// A measurement unit, optionally defined relative to a base unit.
///
/// `1 <self> == base_factor <base>`. A unit without a base is its own base and
/// carries a factor of `1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub base: Option<Box<Unit>>,
    #[serde(default = "default_base_factor", deserialize_with = "base_factor")]
    pub base_factor: f64,
}

impl Unit {
    /// Short label for display: the abbreviation, or the name when there is none.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.abbreviation.is_empty() {
            &self.name
        } else {
            &self.abbreviation
        }
    }

    /// Case-insensitive match against either the name or the abbreviation.
    #[must_use]
    pub fn matches_hint(&self, hint: &str) -> bool {
        let hint = hint.to_lowercase();
        self.name.to_lowercase() == hint
            || (!self.abbreviation.is_empty() && self.abbreviation.to_lowercase() == hint)
    }
}
