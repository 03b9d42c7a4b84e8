//! `pantry recipe import`: preview an extracted recipe, optionally save it.

use pantry_client::handles::ImportPreview;
use pantry_core::entities::{ExtractionSource, ImportedIngredientLine, RecipeImportDraft};
use pantry_state::servings::format_quantity;
use pantry_state::{FormAction, RecipeEditor, RecipeForm};
use serde::Serialize;

use super::save::submit;
use crate::cli::subcommands::ImportSource;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::resolve::{Catalog, LineInput, resolve_line};
use crate::commands::shared::settle::settle;
use crate::context::AppContext;
use crate::output::{TableRow, output, render_rows};

pub async fn run(
    source: &ImportSource,
    save: bool,
    skip_unresolved: bool,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let preview = ImportPreview::new(ctx.client.clone());
    let state = match (&source.url, &source.image) {
        (Some(url), _) => preview.from_url(url).await,
        (None, Some(path)) => preview.from_image(path).await,
        (None, None) => anyhow::bail!("either --url or --image is required"),
    };
    let draft = match settle(state, "failed to import recipe") {
        Ok(draft) => draft,
        Err(error) => {
            ctx.notifier.error("Could not import recipe");
            return Err(error);
        }
    };
    tracing::debug!(
        lines = draft.ingredient_lines.len(),
        unresolved = pantry_state::form::unresolved_lines(&draft).len(),
        "import preview ready"
    );

    if !save {
        return emit_draft(&draft, flags.format);
    }

    let mut form = RecipeForm::from_draft(&draft);
    let pending: Vec<&ImportedIngredientLine> = draft
        .ingredient_lines
        .iter()
        .filter(|line| needs_selection(line))
        .collect();

    if skip_unresolved {
        for line in &pending {
            tracing::info!(line = %line.raw_text, "skipping unmatched ingredient line");
        }
    } else if !pending.is_empty() {
        let mut catalog = Catalog::load(ctx).await?;
        for line in pending {
            let Some(query) = selection_query(line) else {
                tracing::warn!(line = %line.raw_text, "no ingredient name detected, skipping line");
                continue;
            };
            let quantity = line.quantity.map(|value| value.to_string()).unwrap_or_default();
            let input = LineInput {
                query,
                quantity: &quantity,
                unit_hint: line.unit_name_hint.as_deref(),
            };
            let resolved = resolve_line(ctx, &mut catalog, &input).await?;
            form.dispatch(FormAction::AddIngredient(resolved));
        }
    }

    submit(RecipeEditor::new(form), ctx, flags).await
}

/// A line the form cannot take as is: no ingredient, or no unit.
fn needs_selection(line: &ImportedIngredientLine) -> bool {
    !line.is_resolved() || line.resolved_unit.is_none()
}

/// Text typed into the search box for a line: the matched ingredient's name,
/// else the extracted name hint. Raw line text is never used, since an
/// unmatched query becomes a new ingredient.
fn selection_query(line: &ImportedIngredientLine) -> Option<&str> {
    line.resolved_ingredient
        .as_ref()
        .map(|ingredient| ingredient.name.as_str())
        .or(line.ingredient_name_hint.as_deref())
        .filter(|query| !query.trim().is_empty())
}

const fn source_label(source: ExtractionSource) -> &'static str {
    match source {
        ExtractionSource::SchemaOrg => "schema.org markup",
        ExtractionSource::Llm => "text extraction",
        ExtractionSource::Vision => "photo extraction",
    }
}

#[derive(Debug, Serialize)]
struct DraftLineRow {
    status: &'static str,
    text: String,
    ingredient: String,
    quantity: String,
    unit: String,
}

impl From<&ImportedIngredientLine> for DraftLineRow {
    fn from(line: &ImportedIngredientLine) -> Self {
        let ingredient = line
            .resolved_ingredient
            .as_ref()
            .map(|ingredient| ingredient.name.clone())
            .or_else(|| line.ingredient_name_hint.clone())
            .unwrap_or_default();
        let unit = line
            .resolved_unit
            .as_ref()
            .map(|unit| unit.label().to_string())
            .or_else(|| line.unit_name_hint.clone())
            .unwrap_or_default();
        Self {
            status: if needs_selection(line) {
                "unresolved"
            } else {
                "resolved"
            },
            text: line.raw_text.clone(),
            ingredient,
            quantity: line.quantity.map(format_quantity).unwrap_or_default(),
            unit,
        }
    }
}

impl TableRow for DraftLineRow {
    const HEADERS: &'static [&'static str] = &["status", "quantity", "unit", "ingredient", "text"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.status.to_string(),
            self.quantity.clone(),
            self.unit.clone(),
            self.ingredient.clone(),
            self.text.clone(),
        ]
    }
}

fn emit_draft(draft: &RecipeImportDraft, format: OutputFormat) -> anyhow::Result<()> {
    if format != OutputFormat::Table {
        return output(draft, format);
    }

    println!("{}", draft_header(draft));
    let rows: Vec<DraftLineRow> = draft.ingredient_lines.iter().map(DraftLineRow::from).collect();
    println!("{}", render_rows(&rows, OutputFormat::Table)?);
    if !draft.method.trim().is_empty() {
        println!("\nMethod\n{}", draft.method.trim_end());
    }
    Ok(())
}

fn draft_header(draft: &RecipeImportDraft) -> String {
    let mut text = if draft.name.is_empty() {
        "(untitled)".to_string()
    } else {
        draft.name.clone()
    };
    if let Some(servings) = draft.servings {
        text.push_str(&format!("\n{}", pantry_state::servings::pluralize(servings, "serving")));
    }
    if let Some(url) = &draft.source_url {
        text.push_str(&format!("\nSource: {url}"));
    }
    text.push_str(&format!(
        "\nExtracted from {}",
        source_label(draft.extraction_source)
    ));
    text
}
