//! # pantry-client
//!
//! Typed HTTP client for the Pantry recipe API.
//!
//! [`ApiClient`] maps each REST operation to one async method returning
//! `Result<_, ApiError>`. The [`handles`] module wraps those calls in
//! [`pantry_state::AsyncTask`]s for front ends that want
//! `{data, error, loading}` tracking instead of raw results.
//!
//! Every request carries `Authorization: Bearer <token>` when a token is
//! configured.

pub mod aliases;
pub mod handles;
pub mod import;
pub mod ingredients;
pub mod recipes;
pub mod units;

mod error;
mod http;

pub use error::ApiError;

use std::time::Duration;

use pantry_config::{ApiConfig, AuthConfig, PantryConfig};
use reqwest::{Method, RequestBuilder};

/// HTTP client for the recipe API. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client from the `[api]` and `[auth]` config sections.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if the base URL is unusable, or
    /// [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(api: &ApiConfig, auth: &AuthConfig) -> Result<Self, ApiError> {
        let base_url = api
            .normalized_base_url()
            .map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;
        let http = reqwest::Client::builder()
            .user_agent(api.user_agent.clone())
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url,
            token: auth.bearer().map(str::to_string),
        })
    }

    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &PantryConfig) -> Result<Self, ApiError> {
        Self::new(&config.api, &config.auth)
    }

    /// Base URL, always ending in exactly one `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "api request");
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }
}
