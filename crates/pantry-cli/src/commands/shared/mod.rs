pub mod ingredient_spec;
pub mod limit;
pub mod mutation;
pub mod resolve;
pub mod settle;
pub mod unit_hint;
