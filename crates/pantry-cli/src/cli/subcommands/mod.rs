mod alias;
mod ingredient;
mod recipe;
mod unit;

pub use alias::AliasCommands;
pub use ingredient::IngredientCommands;
pub use recipe::{ImportSource, RecipeCommands, RecipeFields};
pub use unit::UnitCommands;
