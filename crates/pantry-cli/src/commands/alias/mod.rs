//! `pantry alias`: alternate names the importer uses to match ingredient lines.

use pantry_client::handles::{AliasList, Mutation, UnitCatalog};
use pantry_core::entities::{IngredientAlias, NewIngredientAlias};
use pantry_core::units::Units;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AliasCommands;
use crate::commands::shared::limit::truncate_to;
use crate::commands::shared::mutation::{Deleted, announce};
use crate::commands::shared::settle::settle;
use crate::commands::shared::unit_hint::unit_by_hint;
use crate::context::AppContext;
use crate::output::{TableRow, output, output_rows};

/// Handle `pantry alias`.
pub async fn handle(
    action: &AliasCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AliasCommands::List { ingredient_id } => list(*ingredient_id, ctx, flags).await,
        AliasCommands::Add {
            ingredient_id,
            text,
            unit,
        } => add(*ingredient_id, text, unit, ctx, flags).await,
        AliasCommands::Delete { id } => delete(*id, ctx, flags).await,
    }
}

#[derive(Debug, Serialize)]
struct AliasRow {
    id: i64,
    alias: String,
    ingredient_id: i64,
    unit: String,
}

impl AliasRow {
    fn new(alias: &IngredientAlias, units: &Units) -> Self {
        let unit = units
            .get(alias.unit_id)
            .map_or_else(|_| alias.unit_id.to_string(), |unit| unit.label().to_string());
        Self {
            id: alias.id,
            alias: alias.alias_text.clone(),
            ingredient_id: alias.ingredient_id,
            unit,
        }
    }
}

impl TableRow for AliasRow {
    const HEADERS: &'static [&'static str] = &["id", "alias", "unit"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.alias.clone(), self.unit.clone()]
    }
}

async fn list(ingredient_id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let aliases = AliasList::new(ctx.client.clone());
    let units = UnitCatalog::new(ctx.client.clone());
    let (aliases, _) = tokio::join!(aliases.fetch(ingredient_id), units.fetch());
    let aliases = settle(aliases, "failed to fetch aliases")?;

    // Unit labels are cosmetic; fall back to ids when the catalog fails.
    let units = units.units();
    let mut rows = aliases
        .iter()
        .map(|alias| AliasRow::new(alias, &units))
        .collect::<Vec<_>>();
    truncate_to(&mut rows, flags.limit);
    output_rows(&rows, flags.format)
}

#[derive(Debug, Serialize)]
struct AliasAdded {
    ingredient_id: i64,
    alias: String,
    unit: String,
}

async fn add(
    ingredient_id: i64,
    text: &str,
    unit: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("alias text must not be empty");
    }
    let units = UnitCatalog::new(ctx.client.clone());
    let units = settle(units.fetch().await, "failed to fetch units")?;
    let unit = unit_by_hint(&units, unit)?;

    let alias = NewIngredientAlias {
        alias_text: text.to_string(),
        ingredient_id,
        unit_id: unit.id,
    };
    let mutation = Mutation::new(ctx.client.clone());
    let state = mutation.save_alias(&alias).await;
    announce(ctx, state, "Alias added", "Could not add alias")?;

    output(
        &AliasAdded {
            ingredient_id,
            alias: alias.alias_text,
            unit: unit.label().to_string(),
        },
        flags.format,
    )
}

async fn delete(id: i64, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mutation = Mutation::new(ctx.client.clone());
    let state = mutation.delete_alias(id).await;
    announce(ctx, state, "Alias deleted", "Could not delete alias")?;

    output(&Deleted::new(id), flags.format)
}
