use clap::Subcommand;

/// Unit catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UnitCommands {
    /// List units in catalog order.
    List,
    /// Express a quantity in its base unit (e.g. `2 tbsp` in ml).
    Convert {
        quantity: f64,
        /// Unit by name or abbreviation.
        unit: String,
    },
}
