//! Turns typed ingredient names into recipe lines via the selection widget.
//!
//! The non-interactive equivalent of typing into the search box: an exact
//! (case-insensitive) name match is picked, otherwise the first result, and
//! when nothing matches the new-ingredient modal is confirmed with the typed
//! name and the ingredient is created on the server.

use anyhow::Context;
use pantry_client::handles::{IngredientEditor, IngredientList, UnitCatalog};
use pantry_core::entities::{Ingredient, IngredientQuantity};
use pantry_core::units::Units;
use pantry_state::{AddOutcome, IngredientSelector};

use crate::commands::shared::settle::settle;
use crate::context::AppContext;

/// Ingredients and units needed to resolve lines.
pub struct Catalog {
    pub ingredients: Vec<Ingredient>,
    pub units: Units,
}

impl Catalog {
    pub async fn load(ctx: &AppContext) -> anyhow::Result<Self> {
        let ingredients = IngredientList::new(ctx.client.clone());
        let units = UnitCatalog::new(ctx.client.clone());
        let (ingredients, units) = tokio::join!(ingredients.fetch(), units.fetch());
        Ok(Self {
            ingredients: settle(ingredients, "failed to fetch ingredients")?,
            units: settle(units, "failed to fetch units")?,
        })
    }
}

/// What the user would have typed into the widget.
pub struct LineInput<'a> {
    pub query: &'a str,
    pub quantity: &'a str,
    pub unit_hint: Option<&'a str>,
}

pub async fn resolve_line(
    ctx: &mut AppContext,
    catalog: &mut Catalog,
    input: &LineInput<'_>,
) -> anyhow::Result<IngredientQuantity> {
    if let Some(hint) = input.unit_hint
        && catalog.units.find_by_hint(hint).is_none()
    {
        tracing::warn!(unit = hint, query = input.query, "unknown unit, using the ingredient's default");
    }
    let mut selector =
        IngredientSelector::seeded(input.query, None, input.unit_hint, &catalog.ingredients);
    selector.set_quantity(input.quantity);

    if let Some(index) = best_match(selector.results(), input.query) {
        selector.click(index, &catalog.units);
    }

    match selector
        .add(&catalog.units)
        .with_context(|| format!("cannot add ingredient '{}'", input.query))?
    {
        AddOutcome::Added(line) => {
            tracing::debug!(query = input.query, ingredient = %line.ingredient.name, "matched ingredient");
            Ok(line)
        }
        AddOutcome::NewIngredientRequired => create_ingredient(ctx, catalog, selector).await,
    }
}

async fn create_ingredient(
    ctx: &mut AppContext,
    catalog: &mut Catalog,
    mut selector: IngredientSelector,
) -> anyhow::Result<IngredientQuantity> {
    let request = selector
        .confirm_new_ingredient(&catalog.units)
        .with_context(|| format!("cannot create ingredient '{}'", selector.query()))?;

    let editor = IngredientEditor::new(ctx.client.clone());
    let state = editor.save(&request.ingredient).await;
    let persisted = match settle(state, "failed to create ingredient") {
        Ok(persisted) => persisted,
        Err(error) => {
            ctx.notifier
                .error(format!("Could not create ingredient '{}'", request.ingredient.name));
            return Err(error);
        }
    };
    ctx.notifier
        .success(format!("Ingredient '{}' created", persisted.name));

    catalog.ingredients.push(persisted.clone());
    selector
        .complete_new_ingredient(persisted)
        .context("no confirmed ingredient to complete")
}

/// Exact name match, else the first result.
fn best_match(results: &[Ingredient], query: &str) -> Option<usize> {
    let query = query.trim().to_lowercase();
    results
        .iter()
        .position(|ingredient| ingredient.name.to_lowercase() == query)
        .or_else(|| (!results.is_empty()).then_some(0))
}
