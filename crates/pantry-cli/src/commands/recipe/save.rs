use anyhow::Context;
use pantry_client::handles::RecipeDetail;
use pantry_state::{FormAction, RecipeEditor, RecipeForm, SubmitKind, SubmitOutcome};

use super::view::{RecipeView, emit};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::RecipeFields;
use crate::commands::shared::ingredient_spec::IngredientSpec;
use crate::commands::shared::resolve::{Catalog, LineInput, resolve_line};
use crate::commands::shared::settle::settle;
use crate::context::AppContext;

pub async fn create(
    fields: &RecipeFields,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if fields.name.is_none() {
        anyhow::bail!("--name is required when creating a recipe");
    }
    let mut form = RecipeForm::new();
    apply_fields(&mut form, fields)?;
    add_ingredients(&mut form, &fields.ingredients, ctx).await?;
    submit(RecipeEditor::new(form), ctx, flags).await
}

pub async fn update(
    id: i64,
    fields: &RecipeFields,
    remove: &[usize],
    clear_ingredients: bool,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let detail = RecipeDetail::new(ctx.client.clone());
    let recipe = settle(detail.fetch(id).await, "failed to fetch recipe")?;

    let mut form = RecipeForm::new();
    form.dispatch(FormAction::LoadRecipe(recipe));
    apply_fields(&mut form, fields)?;

    let positions = if clear_ingredients {
        (0..form.ingredients.len()).collect()
    } else {
        removal_order(remove, form.ingredients.len())?
    };
    for index in positions.into_iter().rev() {
        form.dispatch(FormAction::RemoveIngredient(index));
    }

    add_ingredients(&mut form, &fields.ingredients, ctx).await?;
    submit(RecipeEditor::new(form), ctx, flags).await
}

fn apply_fields(form: &mut RecipeForm, fields: &RecipeFields) -> anyhow::Result<()> {
    if let Some(name) = &fields.name {
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("recipe name must not be empty");
        }
        form.dispatch(FormAction::SetName(name.to_string()));
    }
    if let Some(servings) = &fields.servings {
        form.dispatch(FormAction::SetServings(servings.clone()));
    }
    if let Some(method) = &fields.method {
        form.dispatch(FormAction::SetMethod(method.clone()));
    } else if let Some(path) = &fields.method_file {
        let method = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read method file {}", path.display()))?;
        form.dispatch(FormAction::SetMethod(method));
    }
    Ok(())
}

/// Sorted, de-duplicated positions to remove. Every position must exist.
fn removal_order(remove: &[usize], len: usize) -> anyhow::Result<Vec<usize>> {
    let mut positions = remove.to_vec();
    positions.sort_unstable();
    positions.dedup();
    if let Some(missing) = positions.iter().find(|index| **index >= len) {
        anyhow::bail!("no ingredient line at position {missing} (recipe has {len})");
    }
    Ok(positions)
}

async fn add_ingredients(
    form: &mut RecipeForm,
    specs: &[String],
    ctx: &mut AppContext,
) -> anyhow::Result<()> {
    if specs.is_empty() {
        return Ok(());
    }
    let specs = specs
        .iter()
        .map(|spec| IngredientSpec::parse(spec))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut catalog = Catalog::load(ctx).await?;
    for spec in &specs {
        let input = LineInput {
            query: &spec.query,
            quantity: &spec.quantity,
            unit_hint: spec.unit.as_deref(),
        };
        let line = resolve_line(ctx, &mut catalog, &input).await?;
        form.dispatch(FormAction::AddIngredient(line));
    }
    Ok(())
}

pub(super) async fn submit(
    mut editor: RecipeEditor,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.client.clone();
    let outcome = editor
        .submit(move |kind, recipe| async move {
            match (kind, recipe.id) {
                (SubmitKind::Update, Some(id)) => client.update_recipe(id, &recipe).await,
                _ => client.save_recipe(&recipe).await,
            }
        })
        .await;

    let message = outcome.toast_message();
    match outcome {
        SubmitOutcome::Created(recipe) | SubmitOutcome::Updated(recipe) => {
            ctx.notifier.success(message);
            emit(&RecipeView::scaled(&recipe, recipe.servings), flags.format)
        }
        SubmitOutcome::Failed { .. } => {
            ctx.notifier.error(message.clone());
            anyhow::bail!(message)
        }
    }
}
