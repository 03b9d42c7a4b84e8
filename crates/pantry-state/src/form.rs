//! Recipe create/edit form state.
//!
//! All transitions go through [`reduce`], a pure function of the previous
//! form and one [`FormAction`]. Servings stay as raw text until submit.

use pantry_core::entities::{
    Id, ImportedIngredientLine, IngredientQuantity, Recipe, RecipeImportDraft,
};

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetName(String),
    SetServings(String),
    SetMethod(String),
    AddIngredient(IngredientQuantity),
    RemoveIngredient(usize),
    UpdateIngredient {
        index: usize,
        ingredient: IngredientQuantity,
    },
    /// A create succeeded: back to the empty form.
    Saved,
    /// Replace everything with a fetched recipe.
    LoadRecipe(Recipe),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeForm {
    pub id: Option<Id>,
    pub name: String,
    pub servings: String,
    pub method: String,
    pub ingredients: Vec<IngredientQuantity>,
    pub source_url: Option<String>,
}

/// Apply one action.
#[must_use]
pub fn reduce(mut form: RecipeForm, action: FormAction) -> RecipeForm {
    match action {
        FormAction::SetName(name) => form.name = name,
        FormAction::SetServings(servings) => form.servings = servings,
        FormAction::SetMethod(method) => form.method = method,
        FormAction::AddIngredient(ingredient) => form.ingredients.push(ingredient),
        FormAction::RemoveIngredient(index) => {
            if index < form.ingredients.len() {
                form.ingredients.remove(index);
            }
        }
        FormAction::UpdateIngredient { index, ingredient } => {
            if let Some(slot) = form.ingredients.get_mut(index) {
                *slot = ingredient;
            }
        }
        FormAction::Saved => return RecipeForm::default(),
        FormAction::LoadRecipe(recipe) => return RecipeForm::from_recipe(recipe),
    }
    form
}

impl RecipeForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: FormAction) {
        *self = reduce(std::mem::take(self), action);
    }

    #[must_use]
    pub fn from_recipe(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            servings: recipe.servings.to_string(),
            method: recipe.method,
            ingredients: recipe.ingredient_quantities,
            source_url: recipe.source_url,
        }
    }

    /// Seed a new form from an import draft.
    ///
    /// Only lines with both a resolved ingredient and unit become ingredient
    /// quantities. A missing quantity becomes 0.
    #[must_use]
    pub fn from_draft(draft: &RecipeImportDraft) -> Self {
        let ingredients = draft
            .ingredient_lines
            .iter()
            .filter_map(|line| {
                let ingredient = line.resolved_ingredient.clone()?;
                let unit = line.resolved_unit.clone()?;
                Some(IngredientQuantity::pending(
                    ingredient,
                    unit,
                    line.quantity.unwrap_or(0.0),
                ))
            })
            .collect();

        Self {
            id: None,
            name: draft.name.clone(),
            servings: draft.servings.map(|s| s.to_string()).unwrap_or_default(),
            method: draft.method.clone(),
            ingredients,
            source_url: draft.source_url.clone(),
        }
    }

    /// Whether submitting updates an existing recipe rather than creating one.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Servings as submitted.
    #[must_use]
    pub fn parsed_servings(&self) -> i32 {
        parse_servings(&self.servings)
    }

    /// The payload for create or update.
    #[must_use]
    pub fn to_recipe(&self) -> Recipe {
        Recipe {
            id: self.id,
            name: self.name.clone(),
            method: self.method.clone(),
            servings: self.parsed_servings(),
            ingredient_quantities: self.ingredients.clone(),
            source_url: self.source_url.clone(),
        }
    }
}

/// Lines of an import draft that still need an ingredient chosen.
#[must_use]
pub fn unresolved_lines(draft: &RecipeImportDraft) -> Vec<&ImportedIngredientLine> {
    draft
        .ingredient_lines
        .iter()
        .filter(|line| !line.is_resolved())
        .collect()
}

/// Leading-integer parse: `"4 people"` is 4, `" -2"` is -2, anything without
/// a leading integer (or out of range) is 0.
#[must_use]
pub fn parse_servings(text: &str) -> i32 {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    rest[..digits_len]
        .parse::<i32>()
        .map(|value| sign * value)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use pantry_core::entities::{ExtractionSource, Ingredient, Unit};

    use super::*;

    fn gram() -> Unit {
        Unit {
            id: 1,
            name: "gram".into(),
            abbreviation: "g".into(),
            base: None,
            base_factor: 1.0,
        }
    }

    fn line(name: &str, quantity: f64) -> IngredientQuantity {
        IngredientQuantity::pending(Ingredient::pending(name, None), gram(), quantity)
    }

    fn recipe() -> Recipe {
        Recipe {
            id: Some(5),
            name: "Soda bread".into(),
            method: "Mix and bake.".into(),
            servings: 6,
            ingredient_quantities: vec![line("flour", 500.0), line("buttermilk", 400.0)],
            source_url: None,
        }
    }

    #[test]
    fn scalar_setters_replace_one_field() {
        let mut form = RecipeForm::new();
        form.dispatch(FormAction::SetName("Scones".into()));
        form.dispatch(FormAction::SetServings("8".into()));
        form.dispatch(FormAction::SetMethod("Rub in.".into()));
        assert_eq!(form.name, "Scones");
        assert_eq!(form.servings, "8");
        assert_eq!(form.method, "Rub in.");
        assert!(form.ingredients.is_empty());
    }

    #[test]
    fn additions_preserve_order() {
        let names = ["a", "b", "c", "d", "e"];
        let form = names.iter().fold(RecipeForm::new(), |form, name| {
            reduce(form, FormAction::AddIngredient(line(name, 1.0)))
        });
        let got: Vec<&str> = form
            .ingredients
            .iter()
            .map(|iq| iq.ingredient.name.as_str())
            .collect();
        assert_eq!(got, names);
    }

    #[test]
    fn remove_and_update_by_index() {
        let mut form = RecipeForm::from_recipe(recipe());
        form.dispatch(FormAction::UpdateIngredient {
            index: 1,
            ingredient: line("milk", 350.0),
        });
        assert_eq!(form.ingredients[1].ingredient.name, "milk");

        form.dispatch(FormAction::RemoveIngredient(0));
        assert_eq!(form.ingredients.len(), 1);
        assert_eq!(form.ingredients[0].ingredient.name, "milk");
    }

    #[test]
    fn out_of_range_index_is_noop() {
        let before = RecipeForm::from_recipe(recipe());
        let after = reduce(before.clone(), FormAction::RemoveIngredient(7));
        assert_eq!(after, before);
        let after = reduce(
            before.clone(),
            FormAction::UpdateIngredient {
                index: 2,
                ingredient: line("x", 1.0),
            },
        );
        assert_eq!(after, before);
    }

    #[test]
    fn load_then_saved_round_trip() {
        let mut form = RecipeForm::new();
        form.dispatch(FormAction::LoadRecipe(recipe()));
        assert!(form.is_editing());
        assert_eq!(form.servings, "6");
        assert_eq!(form.to_recipe(), recipe());

        form.dispatch(FormAction::Saved);
        assert_eq!(form, RecipeForm::default());
        assert!(!form.is_editing());
    }

    #[rstest]
    #[case("", 0)]
    #[case("   ", 0)]
    #[case("4", 4)]
    #[case(" 12 ", 12)]
    #[case("4 people", 4)]
    #[case("2.5", 2)]
    #[case("-3", -3)]
    #[case("abc", 0)]
    #[case("99999999999", 0)]
    fn servings_parsing(#[case] text: &str, #[case] expected: i32) {
        assert_eq!(parse_servings(text), expected);
    }

    #[test]
    fn blank_servings_submit_as_zero() {
        let mut form = RecipeForm::new();
        form.dispatch(FormAction::SetName("Toast".into()));
        assert_eq!(form.to_recipe().servings, 0);
    }

    fn draft() -> RecipeImportDraft {
        let resolved = ImportedIngredientLine {
            raw_text: "200g flour".into(),
            quantity: Some(200.0),
            ingredient_name_hint: Some("flour".into()),
            unit_name_hint: Some("g".into()),
            resolved_ingredient: Some(Ingredient {
                id: Some(10),
                name: "flour".into(),
                default_unit: Some(gram()),
            }),
            resolved_unit: Some(gram()),
        };
        let no_quantity = ImportedIngredientLine {
            raw_text: "salt".into(),
            quantity: None,
            ingredient_name_hint: Some("salt".into()),
            unit_name_hint: None,
            resolved_ingredient: Some(Ingredient {
                id: Some(11),
                name: "salt".into(),
                default_unit: None,
            }),
            resolved_unit: Some(gram()),
        };
        let unresolved = ImportedIngredientLine {
            raw_text: "a pinch of saffron".into(),
            quantity: None,
            ingredient_name_hint: Some("saffron".into()),
            unit_name_hint: Some("pinch".into()),
            resolved_ingredient: None,
            resolved_unit: None,
        };
        let no_unit = ImportedIngredientLine {
            raw_text: "3 eggs".into(),
            quantity: Some(3.0),
            ingredient_name_hint: Some("eggs".into()),
            unit_name_hint: None,
            resolved_ingredient: Some(Ingredient::pending("egg", None)),
            resolved_unit: None,
        };
        RecipeImportDraft {
            name: "Saffron buns".into(),
            servings: None,
            method: "Knead.".into(),
            source_url: Some("https://example.com/buns".into()),
            extraction_source: ExtractionSource::Llm,
            ingredient_lines: vec![resolved, no_quantity, unresolved, no_unit],
        }
    }

    #[test]
    fn draft_seeds_only_fully_resolved_lines() {
        let form = RecipeForm::from_draft(&draft());
        assert_eq!(form.id, None);
        assert_eq!(form.name, "Saffron buns");
        assert_eq!(form.servings, "");
        assert_eq!(form.source_url.as_deref(), Some("https://example.com/buns"));

        let got: Vec<(&str, f64)> = form
            .ingredients
            .iter()
            .map(|iq| (iq.ingredient.name.as_str(), iq.quantity))
            .collect();
        assert_eq!(got, vec![("flour", 200.0), ("salt", 0.0)]);
    }

    #[test]
    fn unresolved_lines_lack_an_ingredient() {
        let draft = draft();
        let raw: Vec<&str> = unresolved_lines(&draft)
            .iter()
            .map(|l| l.raw_text.as_str())
            .collect();
        assert_eq!(raw, vec!["a pinch of saffron"]);
    }
}
