use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `pantry` binary.
#[derive(Debug, Parser)]
#[command(name = "pantry", version, about = "Pantry - recipes, ingredients and imports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress notifications and non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table colours: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// API base URL for this invocation (overrides `api.base_url`)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{IngredientCommands, RecipeCommands, UnitCommands};
    use super::{Cli, ColorMode, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "pantry", "--format", "json", "--limit", "10", "--verbose", "unit", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Unit {
                action: UnitCommands::List
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["pantry", "recipe", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert_eq!(cli.global_flags().color, ColorMode::Auto);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["pantry", "--format", "xml", "unit", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn create_collects_repeated_ingredients() {
        let cli = Cli::try_parse_from([
            "pantry",
            "recipe",
            "create",
            "--name",
            "Pancakes",
            "--servings",
            "4",
            "--ingredient",
            "flour=200 g",
            "--ingredient",
            "eggs=2",
        ])
        .expect("cli should parse");

        let Commands::Recipe {
            action: RecipeCommands::Create { fields },
        } = cli.command
        else {
            panic!("expected recipe create");
        };
        assert_eq!(fields.name.as_deref(), Some("Pancakes"));
        assert_eq!(fields.ingredients, vec!["flour=200 g", "eggs=2"]);
    }

    #[test]
    fn method_and_method_file_conflict() {
        let parsed = Cli::try_parse_from([
            "pantry",
            "recipe",
            "create",
            "--method",
            "Mix.",
            "--method-file",
            "method.md",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn import_requires_exactly_one_source() {
        assert!(Cli::try_parse_from(["pantry", "recipe", "import"]).is_err());
        assert!(
            Cli::try_parse_from([
                "pantry",
                "recipe",
                "import",
                "--url",
                "https://example.com",
                "--image",
                "card.png",
            ])
            .is_err()
        );

        let cli = Cli::try_parse_from(["pantry", "recipe", "import", "--image", "card.png"])
            .expect("cli should parse");
        let Commands::Recipe {
            action: RecipeCommands::Import { source, save, .. },
        } = cli.command
        else {
            panic!("expected recipe import");
        };
        assert_eq!(source.image, Some(PathBuf::from("card.png")));
        assert!(!save);
    }

    #[test]
    fn skip_unresolved_requires_save() {
        let parsed = Cli::try_parse_from([
            "pantry",
            "recipe",
            "import",
            "--url",
            "https://example.com",
            "--skip-unresolved",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn ingredient_page_defaults_to_first() {
        let cli = Cli::try_parse_from(["pantry", "ingredient", "page"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Ingredient {
                action: IngredientCommands::Page { page: 1, size: None }
            }
        ));
    }

    #[test]
    fn base_url_override_is_global() {
        let cli = Cli::try_parse_from([
            "pantry",
            "unit",
            "convert",
            "2",
            "tbsp",
            "--base-url",
            "http://pantry.local/api/v1/",
        ])
        .expect("cli should parse");

        assert_eq!(
            cli.global_flags().base_url.as_deref(),
            Some("http://pantry.local/api/v1/")
        );
        let Commands::Unit {
            action: UnitCommands::Convert { quantity, unit },
        } = cli.command
        else {
            panic!("expected unit convert");
        };
        assert!((quantity - 2.0).abs() < f64::EPSILON);
        assert_eq!(unit, "tbsp");
    }
}
