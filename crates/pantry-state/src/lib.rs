//! # pantry-state
//!
//! Interaction state for Pantry front ends. Nothing in here performs I/O:
//! network calls are passed in as closures, time is passed in as `Instant`s.
//!
//! - [`async_state`]: the `idle → loading → success | failure` request lifecycle
//! - [`search`]: case-insensitive ingredient substring filter
//! - [`selector`]: keyboard-navigable find-or-create ingredient widget
//! - [`form`]: the recipe create/edit form reducer
//! - [`editor`]: form + submission wiring (create resets, update keeps)
//! - [`servings`]: servings stepper, quantity scaling and formatting
//! - [`toast`]: single-slot transient notifications
//! - [`pager`] and [`listing`]: list navigation and display helpers

pub mod async_state;
pub mod editor;
pub mod form;
pub mod listing;
pub mod pager;
pub mod search;
pub mod selector;
pub mod servings;
pub mod toast;

pub use async_state::{AsyncPhase, AsyncState, AsyncTask};
pub use editor::{RecipeEditor, SubmitKind, SubmitOutcome};
pub use form::{FormAction, RecipeForm};
pub use search::search_ingredients;
pub use selector::{AddOutcome, Focus, IngredientSelector, Key, NewIngredientDraft, NewIngredientRequest};
pub use toast::{Toast, ToastKind, Toasts};
