//! `pantry unit`: the unit catalog and base-unit conversion.

use pantry_client::handles::UnitCatalog;
use pantry_core::entities::Unit;
use pantry_core::units::Units;
use pantry_state::servings::format_quantity;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::UnitCommands;
use crate::commands::shared::limit::truncate_to;
use crate::commands::shared::settle::settle;
use crate::commands::shared::unit_hint::unit_by_hint;
use crate::context::AppContext;
use crate::output::{TableRow, output, output_rows};

/// Handle `pantry unit`.
pub async fn handle(
    action: &UnitCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let catalog = UnitCatalog::new(ctx.client.clone());
    let units = settle(catalog.fetch().await, "failed to fetch units")?;
    match action {
        UnitCommands::List => list(&units, flags),
        UnitCommands::Convert { quantity, unit } => convert(&units, *quantity, unit, flags),
    }
}

#[derive(Debug, Serialize)]
struct UnitRow {
    id: i64,
    name: String,
    abbreviation: String,
    base: Option<String>,
    base_factor: f64,
}

impl From<&Unit> for UnitRow {
    fn from(unit: &Unit) -> Self {
        Self {
            id: unit.id,
            name: unit.name.clone(),
            abbreviation: unit.abbreviation.clone(),
            base: unit.base.as_ref().map(|base| base.label().to_string()),
            base_factor: unit.base_factor,
        }
    }
}

impl TableRow for UnitRow {
    const HEADERS: &'static [&'static str] = &["id", "name", "abbr", "base", "factor"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.abbreviation.clone(),
            self.base.clone().unwrap_or_else(|| "-".to_string()),
            format_quantity(self.base_factor),
        ]
    }
}

fn list(units: &Units, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut rows = units.iter().map(UnitRow::from).collect::<Vec<_>>();
    truncate_to(&mut rows, flags.limit);
    output_rows(&rows, flags.format)
}

#[derive(Debug, Serialize, PartialEq)]
struct Conversion {
    quantity: f64,
    unit: String,
    base_quantity: f64,
    base_unit: String,
}

impl Conversion {
    fn new(units: &Units, quantity: f64, hint: &str) -> anyhow::Result<Self> {
        let unit = unit_by_hint(units, hint)?;
        let (base_quantity, base) = units.to_base(unit, quantity);
        Ok(Self {
            quantity,
            unit: unit.label().to_string(),
            base_quantity,
            base_unit: base.label().to_string(),
        })
    }

    fn sentence(&self) -> String {
        format!(
            "{} {} = {} {}",
            format_quantity(self.quantity),
            self.unit,
            format_quantity(self.base_quantity),
            self.base_unit
        )
    }
}

fn convert(units: &Units, quantity: f64, hint: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    let conversion = Conversion::new(units, quantity, hint)?;
    if flags.format == OutputFormat::Table {
        println!("{}", conversion.sentence());
        Ok(())
    } else {
        output(&conversion, flags.format)
    }
}
