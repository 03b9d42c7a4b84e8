use anyhow::bail;
use pantry_core::schema::{SCHEMA_NAMES, schema_for_name};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;

/// Handle `pantry schema`. Needs neither config nor network.
pub fn handle(args: &SchemaArgs, _flags: &GlobalFlags) -> anyhow::Result<()> {
    println!("{}", render(&args.type_name)?);
    Ok(())
}

fn render(type_name: &str) -> anyhow::Result<String> {
    if type_name == "list" {
        return Ok(SCHEMA_NAMES.join("\n"));
    }
    match schema_for_name(type_name)? {
        Some(schema) => Ok(serde_json::to_string_pretty(&schema)?),
        None => bail!(
            "unknown schema '{type_name}' (available: {})",
            SCHEMA_NAMES.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::render;

    #[test]
    fn list_prints_every_name() {
        let listing = render("list").unwrap();
        assert!(listing.lines().any(|line| line == "recipe"));
        assert!(listing.lines().any(|line| line == "recipe_import_draft"));
    }

    #[test]
    fn dashed_names_resolve() {
        let schema = render("ingredient-quantity").unwrap();
        assert!(schema.contains("\"properties\""));
    }

    #[test]
    fn unknown_name_lists_available() {
        let err = render("pizza").unwrap_err().to_string();
        assert!(err.starts_with("unknown schema 'pizza' (available: recipe,"));
    }
}
