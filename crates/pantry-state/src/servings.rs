//! Servings stepper and quantity scaling for the recipe view.

use pantry_core::entities::IngredientQuantity;

/// Requested servings. Never drops below 1 through `decrement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Servings(i32);

impl Servings {
    /// Start at the recipe's own serving count.
    #[must_use]
    pub const fn init(servings: i32) -> Self {
        Self(servings)
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    pub const fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1).max(1);
    }
}

/// `quantity * requested / base`. A base of 0 leaves the quantity unscaled.
#[must_use]
pub fn scale_quantity(quantity: f64, base_servings: i32, requested: i32) -> f64 {
    if base_servings == 0 {
        return quantity;
    }
    quantity * f64::from(requested) / f64::from(base_servings)
}

/// At most two decimals, trailing zeros stripped: `2.50` is `"2.5"`, `3.00` is `"3"`.
#[must_use]
pub fn format_quantity(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `"1 serving"`, `"4 servings"`.
#[must_use]
pub fn pluralize(count: impl Into<i64>, noun: &str) -> String {
    let count = count.into();
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Display line for one ingredient scaled to `requested` servings,
/// e.g. `"400 g flour"`.
#[must_use]
pub fn scaled_line(line: &IngredientQuantity, base_servings: i32, requested: i32) -> String {
    let quantity = format_quantity(scale_quantity(line.quantity, base_servings, requested));
    let unit = line.unit.label();
    if unit.is_empty() {
        format!("{quantity} {}", line.ingredient.name)
    } else {
        format!("{quantity} {unit} {}", line.ingredient.name)
    }
}
