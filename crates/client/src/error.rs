//! Error types for the statline clients.

use crate::models::toggl::TogglApiError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types that can occur when calling the upstream APIs.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Blank or malformed arguments, caught before any network call.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No API token configured; caught before any network call.
    #[error("Not authenticated: no API token configured")]
    Unauthenticated,

    /// Remote returned 404 for a named resource.
    #[error("{0} not found")]
    NotFound(String),

    /// API returned a non-success response.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed JSON body on an expected-success response.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Create an API error from a non-success status code and response body.
    ///
    /// Toggl error bodies carry `message`, `tip` and `code` fields; the
    /// combined message always includes the tip when present. Anything that
    /// does not parse falls back to the numeric status text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<TogglApiError>(body) {
            Ok(error_body) => {
                let mut message = error_body
                    .message
                    .unwrap_or_else(|| format!("HTTP {}", status));
                if let Some(tip) = error_body.tip.filter(|t| !t.is_empty()) {
                    message.push_str(" - ");
                    message.push_str(&tip);
                }
                message
            }
            Err(_) => format!("HTTP {}", status),
        };

        Self::Api { status, message }
    }
}
