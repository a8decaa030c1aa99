//! Error taxonomy for Spotify Web API operations.
//!
//! Every endpoint function returns [`SpotifyResult`]. Non-2xx responses are
//! classified exactly once, in [`SpotifyError::from_response`], into a variant
//! that preserves the originating HTTP status. Nothing in this crate retries
//! internally; rate limits and server errors surface to the caller unchanged.
//!
//! The single place where an error becomes an absent value is the [`optional`]
//! combinator, and its boundary is exactly HTTP 400.

use reqwest::StatusCode;
use thiserror::Error;

use crate::{types::ApiErrorBody, uri::ResourceKind};

/// Spotify Web API client errors.
#[derive(Error, Debug)]
pub enum SpotifyError {
    /// The API rejected the request as malformed (HTTP 400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing, expired, or insufficient credentials (HTTP 401/403)
    #[error("Authorization failed ({status}): {message}")]
    Authorization { status: u16, message: String },

    /// The requested resource does not exist (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the API (HTTP 429)
    #[error("Rate limited by Spotify API")]
    RateLimited { retry_after: Option<u64> },

    /// Spotify service failure (HTTP 5xx)
    #[error("Spotify server error ({status})")]
    Server { status: u16 },

    /// Any other non-2xx response
    #[error("Spotify API error {status}: {message}")]
    Api { status: u16, message: String },

    /// An identifier failed local validation before any request was made
    #[error("Invalid {kind} identifier: {input}")]
    InvalidIdentifier { kind: ResourceKind, input: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("Failed to parse Spotify response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Token cache or refresh failure
    #[error("Token error: {0}")]
    Token(String),
}

impl SpotifyError {
    /// Classifies a non-2xx response into an error variant.
    ///
    /// Reads the standard `{"error":{"status","message"}}` envelope when the
    /// body carries one; falls back to the HTTP reason phrase otherwise. The
    /// `Retry-After` header is captured for 429 responses so callers can
    /// schedule their own retry.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.error.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };

        match status {
            StatusCode::BAD_REQUEST => SpotifyError::BadRequest(message),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SpotifyError::Authorization {
                status: status.as_u16(),
                message,
            },
            StatusCode::NOT_FOUND => SpotifyError::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => SpotifyError::RateLimited { retry_after },
            s if s.is_server_error() => SpotifyError::Server {
                status: s.as_u16(),
            },
            s => SpotifyError::Api {
                status: s.as_u16(),
                message,
            },
        }
    }

    /// Returns the originating HTTP status, when the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            SpotifyError::BadRequest(_) => Some(400),
            SpotifyError::Authorization { status, .. } => Some(*status),
            SpotifyError::NotFound(_) => Some(404),
            SpotifyError::RateLimited { .. } => Some(429),
            SpotifyError::Server { status } => Some(*status),
            SpotifyError::Api { status, .. } => Some(*status),
            SpotifyError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for Spotify operations.
pub type SpotifyResult<T> = Result<T, SpotifyError>;

/// Converts a [`SpotifyError::BadRequest`] failure into an absent value.
///
/// The boundary is exactly HTTP 400: endpoints that signal "no such thing"
/// with a 400 (malformed or unknown id) yield `Ok(None)` through this
/// combinator, while 401, 403, 404, 429 and 5xx keep propagating unchanged.
pub fn optional<T>(result: SpotifyResult<T>) -> SpotifyResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(SpotifyError::BadRequest(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
