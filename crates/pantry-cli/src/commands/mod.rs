pub mod alias;
pub mod dispatch;
pub mod ingredient;
pub mod recipe;
pub mod schema;
pub mod shared;
pub mod unit;
