//! Shared HTTP response helpers.
//!
//! Centralizes the status check and body decoding so the endpoint modules
//! only build requests and pick a response shape.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// RFC 7807 problem document, as returned by the API on errors.
#[derive(Deserialize)]
struct ProblemDetail {
    detail: Option<String>,
    title: Option<String>,
}

/// Return the response unchanged on success, else [`ApiError::Api`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = error_message(&body)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "request failed".to_string());
    tracing::debug!(status = status.as_u16(), %message, "API returned an error");
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Check status, then decode the body as `T`.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let resp = check_response(resp).await?;
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Check status and discard the body (`204 No Content` and friends).
pub async fn expect_empty(resp: reqwest::Response) -> Result<(), ApiError> {
    check_response(resp).await.map(drop)
}

/// Problem `detail` (or `title`) when the body is a problem document, else
/// the trimmed body itself. `None` for an empty body.
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Ok(problem) = serde_json::from_str::<ProblemDetail>(body)
        && let Some(text) = problem
            .detail
            .or(problem.title)
            .filter(|text| !text.trim().is_empty())
    {
        return Some(text);
    }
    Some(body.to_string())
}
