//! Ingredient alias endpoints.
//!
//! Aliases teach the import resolver that, say, "plain flour" means the
//! `flour` ingredient in grams.

use pantry_core::entities::{Id, IngredientAlias, NewIngredientAlias};

use crate::http::{expect_empty, read_json};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be parsed.
    pub async fn fetch_aliases(&self, ingredient_id: Id) -> Result<Vec<IngredientAlias>, ApiError> {
        read_json(
            self.get(&format!("ingredient/{ingredient_id}/alias"))
                .send()
                .await?,
        )
        .await
    }

    /// The server answers `204 No Content`.
    ///
    /// # Errors
    ///
    /// As [`Self::fetch_aliases`].
    pub async fn save_alias(&self, alias: &NewIngredientAlias) -> Result<(), ApiError> {
        expect_empty(self.post("ingredient-alias/").json(alias).send().await?).await
    }

    /// # Errors
    ///
    /// As [`Self::fetch_aliases`].
    pub async fn delete_alias(&self, id: Id) -> Result<(), ApiError> {
        expect_empty(
            self.delete(&format!("ingredient-alias/{id}"))
                .send()
                .await?,
        )
        .await
    }
}
