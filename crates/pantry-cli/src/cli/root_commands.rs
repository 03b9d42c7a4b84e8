use clap::{Args, Subcommand};

use crate::cli::subcommands::{AliasCommands, IngredientCommands, RecipeCommands, UnitCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Recipes: list, show, create, update, delete, import.
    Recipe {
        #[command(subcommand)]
        action: RecipeCommands,
    },
    /// Ingredients.
    Ingredient {
        #[command(subcommand)]
        action: IngredientCommands,
    },
    /// Ingredient aliases used when resolving imported lines.
    Alias {
        #[command(subcommand)]
        action: AliasCommands,
    },
    /// Unit catalog.
    Unit {
        #[command(subcommand)]
        action: UnitCommands,
    },
    /// Print the JSON Schema of a wire type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name (e.g. `recipe`, `recipe_import_draft`); `list` prints all names.
    pub type_name: String,
}
