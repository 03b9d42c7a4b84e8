//! `recipe/` endpoints.

use pantry_core::entities::{Id, Recipe};

use crate::http::{expect_empty, read_json};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// All recipes, in server order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be parsed.
    pub async fn fetch_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        read_json(self.get("recipe/").send().await?).await
    }

    /// # Errors
    ///
    /// As [`Self::fetch_recipes`]; an unknown id is `ApiError::Api { status: 404, .. }`.
    pub async fn fetch_recipe(&self, id: Id) -> Result<Recipe, ApiError> {
        read_json(self.get(&format!("recipe/{id}")).send().await?).await
    }

    /// Create a recipe. The payload's `id` is expected to be `None`.
    ///
    /// # Errors
    ///
    /// As [`Self::fetch_recipes`].
    pub async fn save_recipe(&self, recipe: &Recipe) -> Result<Recipe, ApiError> {
        read_json(self.post("recipe/").json(recipe).send().await?).await
    }

    /// # Errors
    ///
    /// As [`Self::fetch_recipes`].
    pub async fn update_recipe(&self, id: Id, recipe: &Recipe) -> Result<Recipe, ApiError> {
        read_json(self.put(&format!("recipe/{id}")).json(recipe).send().await?).await
    }

    /// # Errors
    ///
    /// As [`Self::fetch_recipes`].
    pub async fn delete_recipe(&self, id: Id) -> Result<(), ApiError> {
        expect_empty(self.delete(&format!("recipe/{id}")).send().await?).await
    }
}
