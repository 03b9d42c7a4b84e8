use pantry_core::entities::Ingredient;
use serde::Serialize;

use crate::output::TableRow;

#[derive(Debug, Clone, Serialize)]
pub struct IngredientRow {
    pub id: Option<i64>,
    pub name: String,
    pub default_unit: Option<String>,
}

impl From<&Ingredient> for IngredientRow {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name.clone(),
            default_unit: ingredient
                .default_unit
                .as_ref()
                .map(|unit| unit.label().to_string()),
        }
    }
}

impl TableRow for IngredientRow {
    const HEADERS: &'static [&'static str] = &["id", "name", "unit"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            self.name.clone(),
            self.default_unit.clone().unwrap_or_else(|| "-".to_string()),
        ]
    }
}
