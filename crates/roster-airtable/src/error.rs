use thiserror::Error;

/// Failures talking to the Airtable REST API.
#[derive(Debug, Error)]
pub enum AirtableError {
    /// Connection, TLS or timeout failure before a status came back.
    #[error("airtable request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Airtable answered with a non-2xx status. `message` is the raw body.
    #[error("airtable returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected airtable payload: {0}")]
    Parse(String),

    #[error("airtable rate limit hit; retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Missing credentials, or a write against a read-only source.
    #[error("record source unavailable: {0}")]
    NotConfigured(String),
}
