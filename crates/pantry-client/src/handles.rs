//! API calls wrapped in request-state tracking.
//!
//! A [`Handle`] pairs an [`ApiClient`] with one [`AsyncTask`]. Each typed
//! alias below exposes the calls that produce its data; failures land in the
//! handle's `error` field instead of being returned, and earlier data stays
//! available after a failed refetch.

use std::path::Path;

use pantry_core::entities::{
    Id, Ingredient, IngredientAlias, NewIngredientAlias, PageResponse, Recipe, RecipeImportDraft,
};
use pantry_core::units::Units;
use pantry_state::{AsyncPhase, AsyncState, AsyncTask};

use crate::ApiClient;

#[derive(Debug, Clone)]
pub struct Handle<T> {
    client: ApiClient,
    task: AsyncTask<T>,
}

impl<T: Clone> Handle<T> {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            task: AsyncTask::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> AsyncState<T> {
        self.task.snapshot()
    }

    #[must_use]
    pub fn phase(&self) -> AsyncPhase {
        self.task.phase()
    }

    #[must_use]
    pub fn data(&self) -> Option<T> {
        self.task.snapshot().data
    }
}

pub type RecipeList = Handle<Vec<Recipe>>;
pub type RecipeDetail = Handle<Recipe>;
pub type IngredientList = Handle<Vec<Ingredient>>;
pub type IngredientPage = Handle<PageResponse<Ingredient>>;
pub type IngredientEditor = Handle<Ingredient>;
pub type UnitCatalog = Handle<Units>;
pub type AliasList = Handle<Vec<IngredientAlias>>;
pub type ImportPreview = Handle<RecipeImportDraft>;
/// Mutations with no response body.
pub type Mutation = Handle<()>;

impl Handle<Vec<Recipe>> {
    pub async fn fetch(&self) -> AsyncState<Vec<Recipe>> {
        self.task.execute(|| self.client.fetch_recipes()).await
    }

    /// Loaded recipes, or none yet.
    #[must_use]
    pub fn recipes(&self) -> Vec<Recipe> {
        self.data().unwrap_or_default()
    }
}

impl Handle<Recipe> {
    pub async fn fetch(&self, id: Id) -> AsyncState<Recipe> {
        self.task.execute(|| self.client.fetch_recipe(id)).await
    }

    pub async fn save(&self, recipe: &Recipe) -> AsyncState<Recipe> {
        self.task.execute(|| self.client.save_recipe(recipe)).await
    }

    pub async fn update(&self, id: Id, recipe: &Recipe) -> AsyncState<Recipe> {
        self.task
            .execute(|| self.client.update_recipe(id, recipe))
            .await
    }
}

impl Handle<Vec<Ingredient>> {
    pub async fn fetch(&self) -> AsyncState<Vec<Ingredient>> {
        self.task.execute(|| self.client.fetch_ingredients()).await
    }

    #[must_use]
    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.data().unwrap_or_default()
    }
}

impl Handle<PageResponse<Ingredient>> {
    pub async fn fetch(&self, page: u32, size: u32) -> AsyncState<PageResponse<Ingredient>> {
        self.task
            .execute(|| self.client.fetch_ingredient_page(page, size))
            .await
    }
}

impl Handle<Ingredient> {
    pub async fn save(&self, ingredient: &Ingredient) -> AsyncState<Ingredient> {
        self.task
            .execute(|| self.client.save_ingredient(ingredient))
            .await
    }

    pub async fn update(&self, id: Id, ingredient: &Ingredient) -> AsyncState<Ingredient> {
        self.task
            .execute(|| self.client.update_ingredient(id, ingredient))
            .await
    }
}

impl Handle<Units> {
    pub async fn fetch(&self) -> AsyncState<Units> {
        self.task.execute(|| self.client.fetch_units()).await
    }

    /// Loaded catalog, or an empty one.
    #[must_use]
    pub fn units(&self) -> Units {
        self.data().unwrap_or_default()
    }
}

impl Handle<Vec<IngredientAlias>> {
    pub async fn fetch(&self, ingredient_id: Id) -> AsyncState<Vec<IngredientAlias>> {
        self.task
            .execute(|| self.client.fetch_aliases(ingredient_id))
            .await
    }
}

impl Handle<RecipeImportDraft> {
    pub async fn from_url(&self, url: &str) -> AsyncState<RecipeImportDraft> {
        self.task.execute(|| self.client.preview_import(url)).await
    }

    pub async fn from_image(&self, path: &Path) -> AsyncState<RecipeImportDraft> {
        self.task
            .execute(|| self.client.preview_image_file(path))
            .await
    }
}

impl Handle<()> {
    pub async fn delete_recipe(&self, id: Id) -> AsyncState<()> {
        self.task.execute(|| self.client.delete_recipe(id)).await
    }

    pub async fn delete_ingredient(&self, id: Id) -> AsyncState<()> {
        self.task.execute(|| self.client.delete_ingredient(id)).await
    }

    pub async fn save_alias(&self, alias: &NewIngredientAlias) -> AsyncState<()> {
        self.task.execute(|| self.client.save_alias(alias)).await
    }

    pub async fn delete_alias(&self, id: Id) -> AsyncState<()> {
        self.task.execute(|| self.client.delete_alias(id)).await
    }
}
