use pantry_client::handles::IngredientList;
use pantry_state::search_ingredients;

use super::view::IngredientRow;
use crate::cli::GlobalFlags;
use crate::commands::shared::limit::truncate_to;
use crate::commands::shared::settle::settle;
use crate::context::AppContext;
use crate::output::output_rows;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let list = IngredientList::new(ctx.client.clone());
    let ingredients = settle(list.fetch().await, "failed to fetch ingredients")?;
    emit(ingredients.iter().map(IngredientRow::from).collect(), flags)
}

pub async fn search(query: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let list = IngredientList::new(ctx.client.clone());
    let ingredients = settle(list.fetch().await, "failed to fetch ingredients")?;
    let found = search_ingredients(query, &ingredients);
    tracing::debug!(query, matches = found.len(), "ingredient search");
    emit(found.iter().map(IngredientRow::from).collect(), flags)
}

fn emit(mut rows: Vec<IngredientRow>, flags: &GlobalFlags) -> anyhow::Result<()> {
    truncate_to(&mut rows, flags.limit);
    output_rows(&rows, flags.format)
}
