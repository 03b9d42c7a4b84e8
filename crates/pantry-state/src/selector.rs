//! Find-or-create ingredient selection widget.
//!
//! ```text
//! searching ──arrows──▶ highlighted ──enter/click──▶ selected ──add──▶ (emit, reset)
//!     │
//!     └──add (nothing selected)──▶ modal ──confirm──▶ pending ──complete──▶ (emit, reset)
//!                                    └──cancel──▶ searching (state kept)
//! ```
//!
//! The widget never owns the ingredient list or the unit catalog; both are
//! passed in by the caller on each operation that needs them.

use pantry_core::CoreError;
use pantry_core::entities::{Id, Ingredient, IngredientQuantity, Unit};
use pantry_core::units::Units;
use serde::Serialize;

use crate::search::search_ingredients;

/// Navigation keys the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
}

/// Which input currently has focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    #[default]
    Search,
    Quantity,
    Modal,
}

/// Result of pressing "Add".
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// A selected ingredient was emitted and the widget reset.
    Added(IngredientQuantity),
    /// Nothing was selected, so the new-ingredient modal is now open.
    NewIngredientRequired,
}

/// Editable contents of the "create new ingredient" modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIngredientDraft {
    pub name: String,
    pub quantity: String,
    pub unit_id: Option<Id>,
}

impl NewIngredientDraft {
    fn open(name: &str, quantity: &str, units: &Units, unit_hint: Option<&str>) -> Self {
        let unit_id = unit_hint
            .and_then(|hint| units.find_by_hint(hint))
            .or_else(|| units.first())
            .map(|unit| unit.id);
        Self {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit_id,
        }
    }

    /// Validate the modal into a creation request.
    ///
    /// # Errors
    ///
    /// [`CoreError::Validation`] for a blank name or missing unit, and
    /// [`CoreError::UnitNotFound`] when the chosen unit left the catalog.
    pub fn confirm(&self, units: &Units) -> Result<NewIngredientRequest, CoreError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("ingredient name is required".into()));
        }
        let unit_id = self
            .unit_id
            .ok_or_else(|| CoreError::Validation("a unit is required".into()))?;
        let unit = units.get(unit_id)?.clone();
        Ok(NewIngredientRequest {
            ingredient: Ingredient::pending(name, Some(unit.clone())),
            unit,
            quantity: parse_quantity(&self.quantity),
        })
    }
}

/// A confirmed modal: the ingredient to persist plus the line it will become.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIngredientRequest {
    pub ingredient: Ingredient,
    pub unit: Unit,
    pub quantity: f64,
}

/// Quantity text as a number. Blank or non-numeric text is 0.
#[must_use]
pub fn parse_quantity(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientSelector {
    query: String,
    results: Vec<Ingredient>,
    highlighted: Option<usize>,
    selected: Option<Ingredient>,
    unit_id: Option<Id>,
    quantity: String,
    unit_hint: Option<String>,
    modal: Option<NewIngredientDraft>,
    pending: Option<NewIngredientRequest>,
    focus: Focus,
}

impl IngredientSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Widget pre-filled from an unresolved import line.
    #[must_use]
    pub fn seeded(
        search: &str,
        quantity: Option<f64>,
        unit_hint: Option<&str>,
        ingredients: &[Ingredient],
    ) -> Self {
        Self {
            query: search.to_string(),
            results: search_ingredients(search, ingredients),
            quantity: quantity.map(|value| value.to_string()).unwrap_or_default(),
            unit_hint: unit_hint
                .map(str::trim)
                .filter(|hint| !hint.is_empty())
                .map(str::to_string),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[Ingredient] {
        &self.results
    }

    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    #[must_use]
    pub fn highlighted_ingredient(&self) -> Option<&Ingredient> {
        self.highlighted.and_then(|index| self.results.get(index))
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&Ingredient> {
        self.selected.as_ref()
    }

    #[must_use]
    pub const fn unit_id(&self) -> Option<Id> {
        self.unit_id
    }

    #[must_use]
    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub const fn modal(&self) -> Option<&NewIngredientDraft> {
        self.modal.as_ref()
    }

    pub const fn modal_mut(&mut self) -> Option<&mut NewIngredientDraft> {
        self.modal.as_mut()
    }

    #[must_use]
    pub const fn pending(&self) -> Option<&NewIngredientRequest> {
        self.pending.as_ref()
    }

    /// Replace the search text and refilter.
    ///
    /// Editing the text drops any previous selection and highlight.
    pub fn set_query(&mut self, text: &str, ingredients: &[Ingredient]) {
        self.query = text.to_string();
        self.results = search_ingredients(text, ingredients);
        self.highlighted = None;
        self.selected = None;
        self.unit_id = None;
        self.focus = Focus::Search;
    }

    pub fn set_quantity(&mut self, text: &str) {
        self.quantity = text.to_string();
    }

    pub const fn set_unit(&mut self, unit_id: Id) {
        self.unit_id = Some(unit_id);
    }

    /// Handle a navigation key. Returns `true` when the key changed state.
    pub fn key(&mut self, key: Key, units: &Units) -> bool {
        if self.results.is_empty() {
            return false;
        }
        let last = self.results.len() - 1;
        match key {
            Key::ArrowDown => {
                self.highlighted = match self.highlighted {
                    None => Some(0),
                    Some(index) if index < last => Some(index + 1),
                    Some(_) => None,
                };
                true
            }
            Key::ArrowUp => {
                self.highlighted = match self.highlighted {
                    None => Some(last),
                    Some(index) if index > 0 => Some(index - 1),
                    Some(_) => None,
                };
                true
            }
            Key::Enter => match self.highlighted_ingredient().cloned() {
                Some(ingredient) => {
                    self.select(ingredient, units);
                    true
                }
                None => false,
            },
        }
    }

    /// Select the result at `index`. Out of range is a no-op.
    pub fn click(&mut self, index: usize, units: &Units) -> bool {
        match self.results.get(index).cloned() {
            Some(ingredient) => {
                self.select(ingredient, units);
                true
            }
            None => false,
        }
    }

    /// Choose `ingredient`, pick its unit, and move focus to quantity.
    ///
    /// Unit order: the unit hint when it resolves in the catalog, then the
    /// ingredient's default unit, then the first catalog unit.
    pub fn select(&mut self, ingredient: Ingredient, units: &Units) {
        self.unit_id = self
            .unit_hint
            .as_deref()
            .and_then(|hint| units.find_by_hint(hint))
            .or(ingredient.default_unit.as_ref())
            .or_else(|| units.first())
            .map(|unit| unit.id);
        self.query.clone_from(&ingredient.name);
        self.selected = Some(ingredient);
        self.results.clear();
        self.highlighted = None;
        self.focus = Focus::Quantity;
    }

    /// Press "Add".
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] when a selection exists but its unit cannot be
    /// resolved.
    pub fn add(&mut self, units: &Units) -> Result<AddOutcome, CoreError> {
        let Some(ingredient) = self.selected.clone() else {
            self.modal = Some(NewIngredientDraft::open(
                &self.query,
                &self.quantity,
                units,
                self.unit_hint.as_deref(),
            ));
            self.focus = Focus::Modal;
            return Ok(AddOutcome::NewIngredientRequired);
        };

        let unit = self.resolve_unit(&ingredient, units)?;
        let line = IngredientQuantity::pending(ingredient, unit, parse_quantity(&self.quantity));
        self.reset();
        Ok(AddOutcome::Added(line))
    }

    /// Close the modal. Search text, quantity and results are untouched.
    pub fn cancel_new_ingredient(&mut self) {
        self.modal = None;
        self.focus = Focus::Search;
    }

    /// Confirm the open modal and close it.
    ///
    /// The returned request's ingredient must be persisted by the caller, who
    /// then hands the stored copy to [`Self::complete_new_ingredient`].
    ///
    /// # Errors
    ///
    /// [`CoreError::Validation`] when no modal is open or the draft is
    /// invalid. The modal stays open on error.
    pub fn confirm_new_ingredient(
        &mut self,
        units: &Units,
    ) -> Result<NewIngredientRequest, CoreError> {
        let draft = self
            .modal
            .as_ref()
            .ok_or_else(|| CoreError::Validation("no new ingredient is being created".into()))?;
        let request = draft.confirm(units)?;
        self.modal = None;
        self.focus = Focus::Search;
        self.pending = Some(request.clone());
        Ok(request)
    }

    /// Emit the line for a freshly persisted ingredient and reset.
    ///
    /// Returns `None` when no confirmed request is pending.
    pub fn complete_new_ingredient(&mut self, persisted: Ingredient) -> Option<IngredientQuantity> {
        let request = self.pending.take()?;
        let line = IngredientQuantity::pending(persisted, request.unit, request.quantity);
        self.reset();
        Some(line)
    }

    fn resolve_unit(&self, ingredient: &Ingredient, units: &Units) -> Result<Unit, CoreError> {
        let unit_id = self
            .unit_id
            .ok_or_else(|| CoreError::Validation("no unit selected".into()))?;
        match units.get(unit_id) {
            Ok(unit) => Ok(unit.clone()),
            Err(error) => ingredient
                .default_unit
                .clone()
                .filter(|unit| unit.id == unit_id)
                .ok_or(error),
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
