use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Recipe commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RecipeCommands {
    /// List recipes sorted by name.
    List,
    /// Show one recipe, optionally scaled to a number of servings.
    Show {
        id: i64,
        #[arg(long)]
        servings: Option<i32>,
    },
    /// Create a recipe.
    Create {
        #[command(flatten)]
        fields: RecipeFields,
    },
    /// Update a recipe. Unset fields keep their current value.
    Update {
        id: i64,
        #[command(flatten)]
        fields: RecipeFields,
        /// Remove the ingredient line at this zero-based position (repeatable).
        #[arg(long = "remove-ingredient", value_name = "INDEX")]
        remove: Vec<usize>,
        /// Drop every existing ingredient line before adding new ones.
        #[arg(long)]
        clear_ingredients: bool,
    },
    /// Delete a recipe.
    Delete { id: i64 },
    /// Preview a recipe extracted from a web page or photo.
    Import {
        #[command(flatten)]
        source: ImportSource,
        /// Save the previewed recipe, resolving unmatched lines.
        #[arg(long)]
        save: bool,
        /// With --save, drop unmatched lines instead of creating ingredients.
        #[arg(long, requires = "save")]
        skip_unresolved: bool,
    },
}

#[derive(Clone, Debug, Default, Args)]
pub struct RecipeFields {
    #[arg(long)]
    pub name: Option<String>,
    /// Servings; a leading integer is used ("4 people" is 4).
    #[arg(long)]
    pub servings: Option<String>,
    #[arg(long, conflicts_with = "method_file")]
    pub method: Option<String>,
    /// Read the method (markdown) from a file.
    #[arg(long)]
    pub method_file: Option<PathBuf>,
    /// Ingredient line as `<name>=<quantity>[ <unit>]` (repeatable).
    #[arg(long = "ingredient", value_name = "SPEC")]
    pub ingredients: Vec<String>,
}

#[derive(Clone, Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ImportSource {
    /// Recipe page URL.
    #[arg(long)]
    pub url: Option<String>,
    /// Photo of a recipe (jpeg, png, webp, gif, heic).
    #[arg(long)]
    pub image: Option<PathBuf>,
}
