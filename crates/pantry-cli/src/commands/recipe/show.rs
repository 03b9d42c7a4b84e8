use pantry_client::handles::RecipeDetail;

use super::view::{RecipeView, emit};
use crate::cli::GlobalFlags;
use crate::commands::shared::settle::settle;
use crate::context::AppContext;

pub async fn run(
    id: i64,
    servings: Option<i32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let detail = RecipeDetail::new(ctx.client.clone());
    let recipe = settle(detail.fetch(id).await, "failed to fetch recipe")?;

    let requested = requested_servings(recipe.servings, servings);
    emit(&RecipeView::scaled(&recipe, requested), flags.format)
}

/// Requested servings, never below 1 once the user asks for an amount.
fn requested_servings(base: i32, requested: Option<i32>) -> i32 {
    requested.map_or(base, |requested| requested.max(1))
}
