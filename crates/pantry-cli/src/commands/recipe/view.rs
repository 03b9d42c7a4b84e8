use pantry_core::entities::{IngredientQuantity, Recipe};
use pantry_state::listing::recipe_summary;
use pantry_state::servings::{format_quantity, scale_quantity, scaled_line};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::output::{TableRow, output};

/// One row of `pantry recipe list`.
#[derive(Debug, Serialize)]
pub struct RecipeRow {
    pub id: Option<i64>,
    pub name: String,
    pub summary: String,
}

impl From<&Recipe> for RecipeRow {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            summary: recipe_summary(recipe),
        }
    }
}

impl TableRow for RecipeRow {
    const HEADERS: &'static [&'static str] = &["id", "name", "summary"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            self.name.clone(),
            self.summary.clone(),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct IngredientLineView {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
    pub display: String,
}

/// A recipe as shown to the user, with quantities scaled to `servings`.
#[derive(Debug, Serialize)]
pub struct RecipeView {
    pub id: Option<i64>,
    pub name: String,
    pub servings: i32,
    pub base_servings: i32,
    pub summary: String,
    pub ingredients: Vec<IngredientLineView>,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl RecipeView {
    pub fn scaled(recipe: &Recipe, servings: i32) -> Self {
        let base = recipe.servings;
        let line = |iq: &IngredientQuantity| {
            let quantity = scale_quantity(iq.quantity, base, servings);
            IngredientLineView {
                ingredient: iq.ingredient.name.clone(),
                quantity: format_quantity(quantity).parse().unwrap_or(quantity),
                unit: iq.unit.label().to_string(),
                display: scaled_line(iq, base, servings),
            }
        };
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            servings,
            base_servings: base,
            summary: recipe_summary(recipe),
            ingredients: recipe.ingredient_quantities.iter().map(line).collect(),
            method: recipe.method.clone(),
            source_url: recipe.source_url.clone(),
        }
    }

    /// Plain-text rendering for table output.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n{}\n", self.name, "=".repeat(self.name.chars().count()));
        if self.servings == self.base_servings {
            out.push_str(&format!("{}\n", self.summary));
        } else {
            out.push_str(&format!(
                "{} (scaled from {})\n",
                pantry_state::servings::pluralize(self.servings, "serving"),
                self.base_servings
            ));
        }
        if let Some(url) = &self.source_url {
            out.push_str(&format!("Source: {url}\n"));
        }
        if !self.ingredients.is_empty() {
            out.push_str("\nIngredients\n");
            for line in &self.ingredients {
                out.push_str(&format!("  - {}\n", line.display));
            }
        }
        if !self.method.trim().is_empty() {
            out.push_str("\nMethod\n");
            out.push_str(self.method.trim_end());
            out.push('\n');
        }
        out.trim_end().to_string()
    }
}

/// Print a recipe: readable text for tables, the view itself otherwise.
pub fn emit(view: &RecipeView, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Table {
        println!("{}", view.to_text());
        Ok(())
    } else {
        output(view, format)
    }
}
