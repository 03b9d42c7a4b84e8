//! # pantry-core
//!
//! Core types and error types for Pantry.
//!
//! This crate provides the foundational types shared across all Pantry crates:
//! - Entity structs mirroring the recipe API's JSON wire format
//!   (units, ingredients, recipes, aliases, import drafts, pages)
//! - The [`units::Units`] catalog with base-unit conversion
//! - JSON Schemas for the wire types ([`schema`])
//! - Cross-cutting error types
//!
//! Identifiers are carried as `i64` end to end. The API issues 64-bit ids and
//! nothing in Pantry narrows them.

pub mod entities;
pub mod errors;
pub mod schema;
mod serde_helpers;
pub mod units;

pub use errors::CoreError;
