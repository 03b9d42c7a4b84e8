use pantry_client::handles::RecipeList;
use pantry_state::listing::sorted_by_name;

use super::view::RecipeRow;
use crate::cli::GlobalFlags;
use crate::commands::shared::limit::truncate_to;
use crate::commands::shared::settle::settle;
use crate::context::AppContext;
use crate::output::output_rows;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let list = RecipeList::new(ctx.client.clone());
    let recipes = settle(list.fetch().await, "failed to fetch recipes")?;

    let mut rows = sorted_by_name(recipes)
        .iter()
        .map(RecipeRow::from)
        .collect::<Vec<_>>();
    truncate_to(&mut rows, flags.limit);

    output_rows(&rows, flags.format)
}
