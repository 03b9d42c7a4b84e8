use clap::Subcommand;

/// Ingredient commands.
#[derive(Clone, Debug, Subcommand)]
pub enum IngredientCommands {
    /// List all ingredients.
    List,
    /// Case-insensitive substring search over ingredient names.
    Search { query: String },
    /// Browse ingredients one page at a time.
    Page {
        /// One-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Page size (falls back to --limit, then `general.page_size`).
        #[arg(long)]
        size: Option<u32>,
    },
    /// Create an ingredient.
    Create {
        name: String,
        /// Default unit by name or abbreviation (defaults to the first unit).
        #[arg(long)]
        unit: Option<String>,
    },
    /// Rename an ingredient or change its default unit.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        unit: Option<String>,
    },
    /// Delete an ingredient.
    Delete { id: i64 },
}
