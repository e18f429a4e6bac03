//! Status handling shared by every table request.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::de::DeserializeOwned;

use crate::error::AirtableError;

/// Wait used when a 429 carries no usable `Retry-After` value.
const DEFAULT_BACKOFF_SECS: u64 = 60;

/// Pass a 2xx response through; turn anything else into an error.
///
/// A 429 becomes [`AirtableError::RateLimited`]. Other failures keep the
/// status and the body Airtable sent, which names the offending field.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AirtableError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let url = resp.url().path().to_string();
    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = backoff_secs(resp.headers());
        tracing::warn!(%url, retry_after_secs, "airtable throttled the request");
        return Err(AirtableError::RateLimited { retry_after_secs });
    }
    let body = resp.text().await.unwrap_or_default();
    tracing::warn!(%url, status = status.as_u16(), "airtable rejected the request");
    Err(AirtableError::Api {
        status: status.as_u16(),
        message: body,
    })
}

pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, AirtableError> {
    let bytes = check_response(resp).await?.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| AirtableError::Parse(err.to_string()))
}

/// Only the delay-seconds form of `Retry-After` is honored.
fn backoff_secs(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_BACKOFF_SECS)
}
