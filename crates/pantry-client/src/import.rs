//! Recipe import preview endpoints.
//!
//! Both return an unsaved [`RecipeImportDraft`] that seeds the recipe form.
//! Nothing is persisted until the form is submitted.

use std::path::Path;

use pantry_core::entities::RecipeImportDraft;
use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::http::read_json;
use crate::{ApiClient, ApiError};

#[derive(Serialize)]
struct PreviewRequest<'a> {
    url: &'a str,
}

/// Content type guessed from the file extension.
fn image_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}

impl ApiClient {
    /// Extract a draft from a recipe web page.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the API returns a
    /// non-success status (e.g. the page could not be extracted), or the body
    /// cannot be parsed.
    pub async fn preview_import(&self, url: &str) -> Result<RecipeImportDraft, ApiError> {
        read_json(
            self.post("recipe/import/preview")
                .json(&PreviewRequest { url })
                .send()
                .await?,
        )
        .await
    }

    /// Extract a draft from a photo, uploaded as multipart field `image`.
    ///
    /// # Errors
    ///
    /// As [`Self::preview_import`].
    pub async fn preview_image_import(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        mime: &str,
    ) -> Result<RecipeImportDraft, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = Form::new().part("image", part);
        read_json(
            self.post("recipe/import/preview/image")
                .multipart(form)
                .send()
                .await?,
        )
        .await
    }

    /// Read an image file and upload it via [`Self::preview_image_import`].
    ///
    /// # Errors
    ///
    /// [`ApiError::Io`] if the file cannot be read, otherwise as
    /// [`Self::preview_import`].
    pub async fn preview_image_file(&self, path: &Path) -> Result<RecipeImportDraft, ApiError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image");
        tracing::debug!(file = file_name, bytes = bytes.len(), "uploading recipe image");
        self.preview_image_import(bytes, file_name, image_mime(path))
            .await
    }
}
