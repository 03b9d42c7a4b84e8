mod delete;
mod list;
mod page;
mod save;
mod view;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IngredientCommands;
use crate::context::AppContext;

/// Handle `pantry ingredient`.
pub async fn handle(
    action: &IngredientCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        IngredientCommands::List => list::run(ctx, flags).await,
        IngredientCommands::Search { query } => list::search(query, ctx, flags).await,
        IngredientCommands::Page { page, size } => page::run(*page, *size, ctx, flags).await,
        IngredientCommands::Create { name, unit } => {
            save::create(name, unit.as_deref(), ctx, flags).await
        }
        IngredientCommands::Update { id, name, unit } => {
            save::update(*id, name.as_deref(), unit.as_deref(), ctx, flags).await
        }
        IngredientCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}
