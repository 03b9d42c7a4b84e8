use pantry_client::handles::{IngredientEditor, IngredientList, UnitCatalog};
use pantry_core::entities::{Ingredient, Unit};
use pantry_core::units::Units;

use super::view::IngredientRow;
use crate::cli::GlobalFlags;
use crate::commands::shared::mutation::announce;
use crate::commands::shared::settle::settle;
use crate::commands::shared::unit_hint::unit_by_hint;
use crate::context::AppContext;
use crate::output::output;

pub async fn create(
    name: &str,
    unit: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let name = checked_name(name)?;
    let units = UnitCatalog::new(ctx.client.clone());
    let units = settle(units.fetch().await, "failed to fetch units")?;
    let default_unit = default_unit(&units, unit)?;

    let editor = IngredientEditor::new(ctx.client.clone());
    let state = editor.save(&Ingredient::pending(name, default_unit)).await;
    let created = match settle(state, "failed to create ingredient") {
        Ok(created) => created,
        Err(error) => {
            ctx.notifier
                .error(format!("Could not create ingredient '{name}'"));
            return Err(error);
        }
    };
    ctx.notifier
        .success(format!("Ingredient '{}' created", created.name));

    output(&IngredientRow::from(&created), flags.format)
}

pub async fn update(
    id: i64,
    name: Option<&str>,
    unit: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if name.is_none() && unit.is_none() {
        anyhow::bail!("nothing to update: pass --name and/or --unit");
    }

    let list = IngredientList::new(ctx.client.clone());
    let units = UnitCatalog::new(ctx.client.clone());
    let (ingredients, units) = tokio::join!(list.fetch(), units.fetch());
    let ingredients = settle(ingredients, "failed to fetch ingredients")?;

    let mut ingredient = ingredients
        .into_iter()
        .find(|ingredient| ingredient.id == Some(id))
        .ok_or_else(|| anyhow::anyhow!("ingredient {id} not found"))?;
    if let Some(name) = name {
        ingredient.name = checked_name(name)?.to_string();
    }
    if let Some(hint) = unit {
        let units = settle(units, "failed to fetch units")?;
        ingredient.default_unit = Some(unit_by_hint(&units, hint)?.clone());
    }

    let editor = IngredientEditor::new(ctx.client.clone());
    let state = editor.update(id, &ingredient).await;
    let updated = announce(ctx, state, "Ingredient updated", "Could not update ingredient")?;

    output(&IngredientRow::from(&updated), flags.format)
}

fn checked_name(name: &str) -> anyhow::Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("ingredient name must not be empty");
    }
    Ok(name)
}

/// The hinted unit, else the first catalog unit, else none.
fn default_unit(units: &Units, hint: Option<&str>) -> anyhow::Result<Option<Unit>> {
    match hint {
        Some(hint) => Ok(Some(unit_by_hint(units, hint)?.clone())),
        None => Ok(units.first().cloned()),
    }
}
