use clap::Subcommand;

/// Ingredient alias commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AliasCommands {
    /// List the aliases of an ingredient.
    List { ingredient_id: i64 },
    /// Teach the importer another name for an ingredient.
    Add {
        ingredient_id: i64,
        text: String,
        /// Unit by name or abbreviation.
        #[arg(long)]
        unit: String,
    },
    /// Delete an alias.
    Delete { id: i64 },
}
