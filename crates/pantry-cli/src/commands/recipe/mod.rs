mod delete;
mod import;
mod list;
mod save;
mod show;
mod view;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RecipeCommands;
use crate::context::AppContext;

/// Handle `pantry recipe`.
pub async fn handle(
    action: &RecipeCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RecipeCommands::List => list::run(ctx, flags).await,
        RecipeCommands::Show { id, servings } => show::run(*id, *servings, ctx, flags).await,
        RecipeCommands::Create { fields } => save::create(fields, ctx, flags).await,
        RecipeCommands::Update {
            id,
            fields,
            remove,
            clear_ingredients,
        } => save::update(*id, fields, remove, *clear_ingredients, ctx, flags).await,
        RecipeCommands::Delete { id } => delete::run(*id, ctx, flags).await,
        RecipeCommands::Import {
            source,
            save,
            skip_unresolved,
        } => import::run(source, *save, *skip_unresolved, ctx, flags).await,
    }
}
