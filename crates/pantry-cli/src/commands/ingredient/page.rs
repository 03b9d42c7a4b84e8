use pantry_client::handles::IngredientPage;
use pantry_core::entities::{Ingredient, PageResponse};
use pantry_state::pager::Pager;
use serde::Serialize;

use super::view::IngredientRow;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::settle::settle;
use crate::context::AppContext;
use crate::output::{output, output_rows};

#[derive(Debug, Serialize)]
struct PageView {
    /// One-based.
    page: u32,
    total_pages: u32,
    total_elements: u64,
    size: u32,
    has_previous: bool,
    has_next: bool,
    ingredients: Vec<IngredientRow>,
}

impl PageView {
    fn new(response: &PageResponse<Ingredient>) -> (Self, Pager) {
        let pager = Pager::new(response.page, response.total_pages);
        let view = Self {
            page: pager.current() + 1,
            total_pages: pager.total_pages(),
            total_elements: response.total_elements,
            size: response.size,
            has_previous: pager.has_previous(),
            has_next: pager.has_next(),
            ingredients: response.content.iter().map(IngredientRow::from).collect(),
        };
        (view, pager)
    }
}

pub async fn run(
    page: u32,
    size: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if page == 0 {
        anyhow::bail!("pages are numbered from 1");
    }
    let size = effective_limit(size, flags.limit, ctx.config.general.page_size);
    if size == 0 {
        anyhow::bail!("page size must be at least 1");
    }

    let handle = IngredientPage::new(ctx.client.clone());
    let response = settle(
        handle.fetch(page - 1, size).await,
        "failed to fetch ingredient page",
    )?;
    let (view, pager) = PageView::new(&response);

    if flags.format != OutputFormat::Table {
        return output(&view, flags.format);
    }
    output_rows(&view.ingredients, flags.format)?;
    println!("{}", footer(pager));
    Ok(())
}

fn footer(pager: Pager) -> String {
    let mut hints = Vec::new();
    if pager.has_previous() {
        hints.push(format!("--page {} for previous", pager.current()));
    }
    if pager.has_next() {
        hints.push(format!("--page {} for next", pager.current() + 2));
    }
    if hints.is_empty() {
        pager.label()
    } else {
        format!("{} ({})", pager.label(), hints.join(", "))
    }
}
