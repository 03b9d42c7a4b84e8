//! `ingredient/` endpoints.

use pantry_core::entities::{Id, Ingredient, PageResponse};

use crate::http::{expect_empty, read_json};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Every ingredient. Used to back client-side search.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be parsed.
    pub async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, ApiError> {
        read_json(self.get("ingredient/").send().await?).await
    }

    /// One zero-based page of ingredients.
    ///
    /// # Errors
    ///
    /// As [`Self::fetch_ingredients`].
    pub async fn fetch_ingredient_page(
        &self,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<Ingredient>, ApiError> {
        let path = format!("ingredient/page?page={page}&size={size}");
        read_json(self.get(&path).send().await?).await
    }

    /// # Errors
    ///
    /// As [`Self::fetch_ingredients`]. A duplicate name is typically a 409.
    pub async fn save_ingredient(&self, ingredient: &Ingredient) -> Result<Ingredient, ApiError> {
        read_json(self.post("ingredient/").json(ingredient).send().await?).await
    }

    /// # Errors
    ///
    /// As [`Self::fetch_ingredients`].
    pub async fn update_ingredient(
        &self,
        id: Id,
        ingredient: &Ingredient,
    ) -> Result<Ingredient, ApiError> {
        read_json(
            self.put(&format!("ingredient/{id}"))
                .json(ingredient)
                .send()
                .await?,
        )
        .await
    }

    /// # Errors
    ///
    /// As [`Self::fetch_ingredients`]. Deleting an ingredient still used by a
    /// recipe is rejected by the server.
    pub async fn delete_ingredient(&self, id: Id) -> Result<(), ApiError> {
        expect_empty(self.delete(&format!("ingredient/{id}")).send().await?).await
    }
}
