//! Endpoint tests against a mock recipe API.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{
    body_json, body_string_contains, header, header_regex, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pantry_client::{ApiClient, ApiError};
use pantry_config::{ApiConfig, AuthConfig};
use pantry_core::entities::{ExtractionSource, Ingredient, NewIngredientAlias, Recipe};

const TOKEN: &str = "test-access-token";

fn client(server: &MockServer, token: &str) -> ApiClient {
    let api = ApiConfig {
        base_url: format!("{}/api/v1", server.uri()),
        ..ApiConfig::default()
    };
    let auth = AuthConfig {
        token: token.to_string(),
    };
    ApiClient::new(&api, &auth).unwrap()
}

fn gram() -> serde_json::Value {
    json!({"id": 1, "name": "gram", "abbreviation": "g", "base": null, "baseFactor": 1.0})
}

fn pancakes() -> serde_json::Value {
    json!({
        "id": 3,
        "name": "Pancakes",
        "method": "Whisk and fry.",
        "servings": 4,
        "ingredientQuantities": [
            {"id": 30, "quantity": 200.0, "ingredient": {"id": 10, "name": "flour", "defaultUnit": gram()}, "unit": gram()}
        ]
    })
}

#[tokio::test]
async fn fetch_recipes_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/recipe/"))
        .and(header("authorization", "Bearer test-access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([pancakes()])))
        .expect(1)
        .mount(&server)
        .await;

    let recipes = client(&server, TOKEN).fetch_recipes().await.unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "Pancakes");
    assert_eq!(recipes[0].ingredient_quantities[0].unit.abbreviation, "g");
}

#[tokio::test]
async fn anonymous_client_sends_no_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/unit/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([gram()])))
        .mount(&server)
        .await;

    let units = client(&server, "").fetch_units().await.unwrap();
    assert_eq!(units.len(), 1);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn fetch_recipe_not_found_surfaces_problem_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/recipe/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "type": "about:blank",
            "title": "Not Found",
            "status": 404,
            "detail": "Recipe with id 99 not found"
        })))
        .mount(&server)
        .await;

    let err = client(&server, TOKEN).fetch_recipe(99).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "API error (404): Recipe with id 99 not found");
}

#[tokio::test]
async fn save_recipe_posts_null_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/recipe/"))
        .and(body_json(json!({
            "id": null,
            "name": "Toast",
            "method": "",
            "servings": 0,
            "ingredientQuantities": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 41, "name": "Toast", "method": "", "servings": 0, "ingredientQuantities": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = Recipe {
        id: None,
        name: "Toast".into(),
        method: String::new(),
        servings: 0,
        ingredient_quantities: Vec::new(),
        source_url: None,
    };
    let saved = client(&server, TOKEN).save_recipe(&draft).await.unwrap();
    assert_eq!(saved.id, Some(41));
}

#[tokio::test]
async fn update_and_delete_recipe() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/recipe/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pancakes()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/recipe/3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, TOKEN);
    let recipe: Recipe = serde_json::from_value(pancakes()).unwrap();
    let updated = api.update_recipe(3, &recipe).await.unwrap();
    assert_eq!(updated, recipe);
    api.delete_recipe(3).await.unwrap();
}

#[tokio::test]
async fn ingredient_page_uses_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/ingredient/page"))
        .and(query_param("page", "1"))
        .and(query_param("size", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"id": 21, "name": "salt", "defaultUnit": null}],
            "page": 1,
            "size": 20,
            "totalElements": 21,
            "totalPages": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server, TOKEN)
        .fetch_ingredient_page(1, 20)
        .await
        .unwrap();
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.content[0].name, "salt");
}

#[tokio::test]
async fn save_ingredient_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/ingredient/"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({"detail": "Ingredient 'flour' already exists"})),
        )
        .mount(&server)
        .await;

    let err = client(&server, TOKEN)
        .save_ingredient(&Ingredient::pending("flour", None))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 409, .. }));
    assert!(err.to_string().contains("already exists"));
}

#[tokio::test]
async fn aliases_round_trip_with_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/ingredient/10/alias"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 5, "aliasText": "plain flour", "ingredientId": 10, "unitId": 1}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/ingredient-alias/"))
        .and(body_json(json!({"aliasText": "AP flour", "ingredientId": 10, "unitId": 1})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/ingredient-alias/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, TOKEN);
    let aliases = api.fetch_aliases(10).await.unwrap();
    assert_eq!(aliases[0].alias_text, "plain flour");

    api.save_alias(&NewIngredientAlias {
        alias_text: "AP flour".into(),
        ingredient_id: 10,
        unit_id: 1,
    })
    .await
    .unwrap();
    api.delete_alias(5).await.unwrap();
}

#[tokio::test]
async fn import_preview_from_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/recipe/import/preview"))
        .and(body_json(json!({"url": "https://example.com/scones"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Scones",
            "servings": 8,
            "method": "Rub in the butter.",
            "sourceUrl": "https://example.com/scones",
            "extractionSource": "SCHEMA_ORG",
            "ingredientLines": [{
                "rawText": "225g self-raising flour",
                "quantity": 225.0,
                "ingredientNameHint": "self-raising flour",
                "unitNameHint": "g",
                "resolvedIngredient": null,
                "resolvedUnit": null
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = client(&server, TOKEN)
        .preview_import("https://example.com/scones")
        .await
        .unwrap();
    assert_eq!(draft.extraction_source, ExtractionSource::SchemaOrg);
    assert!(!draft.ingredient_lines[0].is_resolved());
}

#[tokio::test]
async fn import_preview_from_image_uploads_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/recipe/import/preview/image"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"image\""))
        .and(body_string_contains("filename=\"card.png\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Grandma's scones",
            "servings": null,
            "method": null,
            "sourceUrl": null,
            "extractionSource": "VISION",
            "ingredientLines": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("card.png");
    std::fs::write(&image, b"\x89PNG fake image bytes").unwrap();

    let draft = client(&server, TOKEN)
        .preview_image_file(&image)
        .await
        .unwrap();
    assert_eq!(draft.extraction_source, ExtractionSource::Vision);
    assert!(draft.source_url.is_none());
}

#[tokio::test]
async fn import_preview_missing_file_is_io_error() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let err = client(&server, TOKEN)
        .preview_image_file(&dir.path().join("missing.jpg"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Io { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}
