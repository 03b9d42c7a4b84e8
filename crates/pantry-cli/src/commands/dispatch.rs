use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Recipe { action } => commands::recipe::handle(&action, ctx, flags).await,
        Commands::Ingredient { action } => commands::ingredient::handle(&action, ctx, flags).await,
        Commands::Alias { action } => commands::alias::handle(&action, ctx, flags).await,
        Commands::Unit { action } => commands::unit::handle(&action, ctx, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
