use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable error pair returned by the API in `{"error": {...}}` bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable error key, e.g. `"invalid_token"` or `"SDK.Error.NoProgramActive"`.
    pub key: String,

    /// Human-readable description, if the server sent one.
    #[serde(default)]
    pub description: Option<String>,
}

impl ApiError {
    pub fn new(key: impl Into<String>, description: Option<String>) -> Self {
        Self {
            key: key.into(),
            description,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{description} ({})", self.key),
            None => f.write_str(&self.key),
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

/// Top-level error type for the `homeconnect-api` crate.
///
/// HTTP failures are mapped into one variant per documented status so callers
/// can branch on them; each carries the server's [`ApiError`] pair.
/// Malformed stream frames never surface here -- the stream reader logs and
/// skips them.
#[derive(Debug, Error)]
pub enum Error {
    // ── API status errors ───────────────────────────────────────────
    /// 401: missing, expired or revoked access token.
    #[error("Unauthorized: {0}")]
    Unauthorized(ApiError),

    /// 403: the token lacks the scope for this resource.
    #[error("Forbidden: {0}")]
    Forbidden(ApiError),

    /// 404: unknown appliance or resource.
    #[error("Not found: {0}")]
    NotFound(ApiError),

    #[error("No program selected: {0}")]
    NoProgramSelected(ApiError),

    #[error("No program active: {0}")]
    NoProgramActive(ApiError),

    /// 406: the requested content type or language is not available.
    #[error("Not acceptable: {0}")]
    NotAcceptable(ApiError),

    #[error("Request timed out: {0}")]
    RequestTimeout(ApiError),

    /// 409 without a more specific error key.
    #[error("Conflict: {0}")]
    Conflict(ApiError),

    #[error("Selected program not set: {0}")]
    SelectedProgramNotSet(ApiError),

    #[error("Active program not set: {0}")]
    ActiveProgramNotSet(ApiError),

    #[error("Wrong operation state: {0}")]
    WrongOperationState(ApiError),

    #[error("Program not available: {0}")]
    ProgramNotAvailable(ApiError),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(ApiError),

    /// 429: rate limited. `retry_after_secs` comes from the `Retry-After` header.
    #[error("Too many requests: {error}")]
    TooManyRequests {
        error: ApiError,
        retry_after_secs: Option<u64>,
    },

    #[error("Internal server error: {0}")]
    InternalServerError(ApiError),

    /// Any other non-success status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Protocol-level failure while reading an open event stream.
    #[error("Event stream failed: {0}")]
    Stream(String),

    // ── Authentication ──────────────────────────────────────────────
    /// The token provider could not produce an access token.
    #[error("Could not obtain access token: {message}")]
    Token { message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Map a non-success response into the matching variant.
    ///
    /// `raw` is the response body. When it is a Home Connect error envelope its
    /// key/description pair is kept; otherwise the status code becomes the key.
    pub fn from_status(status: StatusCode, retry_after_secs: Option<u64>, raw: &str) -> Self {
        let error = serde_json::from_str::<ErrorEnvelope>(raw).map_or_else(
            |_| {
                let description = if raw.trim().is_empty() {
                    status.canonical_reason().map(String::from)
                } else {
                    Some(raw.to_owned())
                };
                ApiError::new(status.as_str(), description)
            },
            |envelope| envelope.error,
        );

        match status.as_u16() {
            401 => Self::Unauthorized(error),
            403 => Self::Forbidden(error),
            404 => match error.key.as_str() {
                "SDK.Error.NoProgramSelected" => Self::NoProgramSelected(error),
                "SDK.Error.NoProgramActive" => Self::NoProgramActive(error),
                _ => Self::NotFound(error),
            },
            406 => Self::NotAcceptable(error),
            408 => Self::RequestTimeout(error),
            409 => match error.key.as_str() {
                "SDK.Error.WrongOperationState" => Self::WrongOperationState(error),
                "SDK.Error.ProgramNotAvailable" => Self::ProgramNotAvailable(error),
                "SDK.Error.SelectedProgramNotSet" => Self::SelectedProgramNotSet(error),
                "SDK.Error.ActiveProgramNotSet" => Self::ActiveProgramNotSet(error),
                _ => Self::Conflict(error),
            },
            415 => Self::UnsupportedMediaType(error),
            429 => Self::TooManyRequests {
                error,
                retry_after_secs,
            },
            500 => Self::InternalServerError(error),
            code => Self::HttpStatus {
                status: code,
                body: raw.to_owned(),
            },
        }
    }

    /// The server's key/description pair, for status errors that carry one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Unauthorized(e)
            | Self::Forbidden(e)
            | Self::NotFound(e)
            | Self::NoProgramSelected(e)
            | Self::NoProgramActive(e)
            | Self::NotAcceptable(e)
            | Self::RequestTimeout(e)
            | Self::Conflict(e)
            | Self::SelectedProgramNotSet(e)
            | Self::ActiveProgramNotSet(e)
            | Self::WrongOperationState(e)
            | Self::ProgramNotAvailable(e)
            | Self::UnsupportedMediaType(e)
            | Self::InternalServerError(e)
            | Self::TooManyRequests { error: e, .. } => Some(e),
            _ => None,
        }
    }

    /// Returns `true` if a fresh access token might resolve this error.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::RequestTimeout(_)
            | Self::TooManyRequests { .. }
            | Self::InternalServerError(_)
            | Self::Stream(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(StatusCode::NOT_FOUND),
            Self::NotFound(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_keeps_server_key_and_description() {
        let body = r#"{"error":{"key":"invalid_token","description":"The access token is invalid"}}"#;
        let err = Error::from_status(StatusCode::UNAUTHORIZED, None, body);

        let Error::Unauthorized(api) = &err else {
            panic!("expected Unauthorized, got {err:?}");
        };
        assert_eq!(api.key, "invalid_token");
        assert_eq!(api.description.as_deref(), Some("The access token is invalid"));
        assert!(err.is_auth_expired());
        assert_eq!(
            err.to_string(),
            "Unauthorized: The access token is invalid (invalid_token)"
        );
    }

    #[test]
    fn conflict_is_refined_by_error_key() {
        let body = r#"{"error":{"key":"SDK.Error.WrongOperationState"}}"#;
        let err = Error::from_status(StatusCode::CONFLICT, None, body);
        assert!(matches!(err, Error::WrongOperationState(_)));

        let body = r#"{"error":{"key":"SDK.Error.SomethingElse"}}"#;
        let err = Error::from_status(StatusCode::CONFLICT, None, body);
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[test]
    fn not_found_is_refined_by_error_key() {
        let body = r#"{"error":{"key":"SDK.Error.NoProgramActive","description":"No active program"}}"#;
        let err = Error::from_status(StatusCode::NOT_FOUND, None, body);
        assert!(matches!(err, Error::NoProgramActive(_)));
        assert!(!err.is_not_found());

        let err = Error::from_status(StatusCode::NOT_FOUND, None, "");
        assert!(err.is_not_found());
    }

    #[test]
    fn too_many_requests_carries_retry_after() {
        let err = Error::from_status(StatusCode::TOO_MANY_REQUESTS, Some(120), "slow down");
        match err {
            Error::TooManyRequests {
                error,
                retry_after_secs,
            } => {
                assert_eq!(retry_after_secs, Some(120));
                assert_eq!(error.key, "429");
                assert_eq!(error.description.as_deref(), Some("slow down"));
            }
            other => panic!("expected TooManyRequests, got {other:?}"),
        }
    }

    #[test]
    fn unmapped_status_is_generic() {
        let err = Error::from_status(StatusCode::BAD_GATEWAY, None, "upstream down");
        assert!(matches!(
            err,
            Error::HttpStatus { status: 502, ref body } if body == "upstream down"
        ));
        assert!(err.api_error().is_none());
    }

    #[test]
    fn non_json_body_falls_back_to_status_reason() {
        let err = Error::from_status(StatusCode::FORBIDDEN, None, "");
        let api = err.api_error().cloned();
        assert_eq!(api, Some(ApiError::new("403", Some("Forbidden".into()))));
    }
}
