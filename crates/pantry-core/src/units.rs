//! The unit catalog loaded from the API.
//!
//! Ordered exactly as the server returned it. `first()` is the fallback unit
//! for newly created ingredients, so ordering matters.

use serde::Serialize;

use crate::entities::{Id, Unit};
use crate::errors::CoreError;

/// Upper bound on base-chain hops. Chains are expected to be one or two deep;
/// the bound only stops a malformed cyclic chain from looping forever.
const MAX_BASE_HOPS: usize = 8;

/// Immutable, ordered collection of units.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Units {
    units: Vec<Unit>,
}

impl Units {
    #[must_use]
    pub const fn new(units: Vec<Unit>) -> Self {
        Self { units }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Unit] {
        &self.units
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Unit> {
        self.units.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Look up a unit by id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnitNotFound`] when no unit carries `id`.
    pub fn get(&self, id: Id) -> Result<&Unit, CoreError> {
        self.units
            .iter()
            .find(|unit| unit.id == id)
            .ok_or(CoreError::UnitNotFound { id })
    }

    #[must_use]
    pub fn first(&self) -> Option<&Unit> {
        self.units.first()
    }

    /// First unit whose name or abbreviation equals `hint`, ignoring case.
    #[must_use]
    pub fn find_by_hint(&self, hint: &str) -> Option<&Unit> {
        let hint = hint.trim();
        if hint.is_empty() {
            return None;
        }
        self.units.iter().find(|unit| unit.matches_hint(hint))
    }

    /// Express `quantity` of `unit` in the root of its base chain.
    ///
    /// Returns the converted quantity and the root unit. Each hop multiplies
    /// by the unit's `base_factor`. When a base in the chain is present in the
    /// catalog the catalog entry is preferred, since the embedded copy may be
    /// shallower than the full chain.
    #[must_use]
    pub fn to_base<'a>(&'a self, unit: &'a Unit, quantity: f64) -> (f64, &'a Unit) {
        let mut current = unit;
        let mut value = quantity;
        for _ in 0..MAX_BASE_HOPS {
            let Some(base) = current.base.as_deref() else {
                break;
            };
            value *= current.base_factor;
            current = self.get(base.id).unwrap_or(base);
        }
        (value, current)
    }
}

impl From<Vec<Unit>> for Units {
    fn from(units: Vec<Unit>) -> Self {
        Self::new(units)
    }
}

impl<'a> IntoIterator for &'a Units {
    type Item = &'a Unit;
    type IntoIter = std::slice::Iter<'a, Unit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}
