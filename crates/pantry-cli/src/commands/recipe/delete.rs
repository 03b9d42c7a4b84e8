use pantry_client::handles::Mutation;

use crate::cli::GlobalFlags;
use crate::commands::shared::mutation::{Deleted, announce};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mutation = Mutation::new(ctx.client.clone());
    let state = mutation.delete_recipe(id).await;
    announce(ctx, state, "Recipe deleted", "Could not delete recipe")?;

    output(&Deleted::new(id), flags.format)
}
