//! Wire-format tests against payloads shaped like the recipe API's responses,
//! plus JsonSchema validation of what we send back.

use pretty_assertions::assert_eq;
use schemars::schema_for;
use serde_json::json;

use pantry_core::entities::{
    ExtractionSource, Ingredient, IngredientAlias, PageResponse, Recipe, RecipeImportDraft,
};

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

const RECIPE: &str = r#"{
    "id": 9007199254740993,
    "name": "Pancakes",
    "method": "Whisk, rest, fry.",
    "servings": 4,
    "ingredientQuantities": [
        {
            "id": 9007199254740995,
            "quantity": 200.0,
            "ingredient": {
                "id": 12,
                "name": "flour",
                "defaultUnit": {"id": 1, "name": "gram", "abbreviation": "g", "base": null, "baseFactor": 1.0}
            },
            "unit": {"id": 1, "name": "gram", "abbreviation": "g", "base": null, "baseFactor": 1.0}
        },
        {
            "id": 9007199254740997,
            "quantity": 0.5,
            "ingredient": {"id": 13, "name": "milk", "defaultUnit": null},
            "unit": {
                "id": 4,
                "name": "litre",
                "abbreviation": "l",
                "base": {"id": 3, "name": "millilitre", "abbreviation": "ml", "base": null, "baseFactor": 1.0},
                "baseFactor": 1000.0
            }
        }
    ]
}"#;

#[test]
fn recipe_ids_beyond_double_precision_survive() {
    let recipe: Recipe = serde_json::from_str(RECIPE).unwrap();
    assert_eq!(recipe.id, Some(9_007_199_254_740_993));
    assert_eq!(recipe.ingredient_quantities[0].id, Some(9_007_199_254_740_995));

    let back = serde_json::to_value(&recipe).unwrap();
    assert_eq!(back["id"], json!(9_007_199_254_740_993_i64));
}

#[test]
fn recipe_keeps_ingredient_order_and_nested_units() {
    let recipe: Recipe = serde_json::from_str(RECIPE).unwrap();
    let names: Vec<&str> = recipe
        .ingredient_quantities
        .iter()
        .map(|iq| iq.ingredient.name.as_str())
        .collect();
    assert_eq!(names, vec!["flour", "milk"]);
    assert!(recipe.ingredient_quantities[1].ingredient.default_unit.is_none());
    assert_eq!(
        recipe.ingredient_quantities[1]
            .unit
            .base
            .as_ref()
            .map(|b| b.name.as_str()),
        Some("millilitre")
    );
    assert!(recipe.source_url.is_none());
}

#[test]
fn new_recipe_serializes_null_id_and_omits_missing_source() {
    let recipe = Recipe {
        id: None,
        name: "Toast".into(),
        method: String::new(),
        servings: 0,
        ingredient_quantities: Vec::new(),
        source_url: None,
    };
    let value = serde_json::to_value(&recipe).unwrap();
    assert_eq!(value["id"], serde_json::Value::Null);
    assert!(value.get("sourceUrl").is_none());
    assert_eq!(value["ingredientQuantities"], json!([]));

    let schema = serde_json::to_value(schema_for!(Recipe)).unwrap();
    let errors = validate_against_schema(&schema, &value);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn parsed_recipe_validates_against_its_schema() {
    let recipe: Recipe = serde_json::from_str(RECIPE).unwrap();
    let schema = serde_json::to_value(schema_for!(Recipe)).unwrap();
    let instance = serde_json::to_value(&recipe).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn import_draft_with_mixed_lines() {
    let draft: RecipeImportDraft = serde_json::from_value(json!({
        "name": "Shakshuka",
        "servings": null,
        "method": null,
        "sourceUrl": "https://example.com/shakshuka",
        "extractionSource": "SCHEMA_ORG",
        "ingredientLines": [
            {
                "rawText": "4 eggs",
                "quantity": 4.0,
                "ingredientNameHint": "eggs",
                "unitNameHint": null,
                "resolvedIngredient": {"id": 7, "name": "egg", "defaultUnit": {"id": 9, "name": "each", "abbreviation": "", "base": null, "baseFactor": 1.0}},
                "resolvedUnit": {"id": 9, "name": "each", "abbreviation": "", "base": null, "baseFactor": 1.0}
            },
            {
                "rawText": "a handful of coriander",
                "quantity": null,
                "ingredientNameHint": "coriander",
                "unitNameHint": "handful",
                "resolvedIngredient": null,
                "resolvedUnit": null
            }
        ]
    }))
    .unwrap();

    assert_eq!(draft.extraction_source, ExtractionSource::SchemaOrg);
    assert_eq!(draft.servings, None);
    assert_eq!(draft.method, "");
    assert!(draft.ingredient_lines[0].is_resolved());
    assert!(!draft.ingredient_lines[1].is_resolved());
    assert_eq!(
        draft.ingredient_lines[1].unit_name_hint.as_deref(),
        Some("handful")
    );
}

#[test]
fn vision_draft_has_no_source_url() {
    let draft: RecipeImportDraft = serde_json::from_value(json!({
        "name": "Grandma's scones",
        "servings": 8,
        "method": "Rub in the butter.",
        "sourceUrl": null,
        "extractionSource": "VISION",
        "ingredientLines": []
    }))
    .unwrap();
    assert_eq!(draft.extraction_source, ExtractionSource::Vision);
    assert!(draft.source_url.is_none());
}

#[test]
fn ingredient_page_shape() {
    let page: PageResponse<Ingredient> = serde_json::from_value(json!({
        "content": [{"id": 1, "name": "salt", "defaultUnit": null}],
        "page": 2,
        "size": 20,
        "totalElements": 41,
        "totalPages": 3
    }))
    .unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 3);
}

#[test]
fn alias_uses_camel_case() {
    let alias: IngredientAlias = serde_json::from_value(json!({
        "id": 5, "aliasText": "plain flour", "ingredientId": 12, "unitId": 1
    }))
    .unwrap();
    assert_eq!(alias.alias_text, "plain flour");
    assert_eq!(alias.ingredient_id, 12);
}
