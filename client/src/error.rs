//! Error types for the StudyHub API client.
//!
//! Every failure in this crate is normalized into [`ApiError`]. The facade
//! is the single point where heterogeneous failures (connection loss,
//! timeouts, server error bodies, undecodable payloads) become one type, so
//! callers branch on the error *kind* rather than re-deriving it.
//!
//! # Message derivation
//!
//! The human-readable message attached to a server failure is derived in a
//! fixed preference order:
//!
//! 1. the error body's `details` field,
//! 2. else the error body's `message` field,
//! 3. else the transport-level message (for responses without a usable
//!    body, a generic `request failed with status N`),
//! 4. else a string coercion of whatever value the body held.

use thiserror::Error;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when talking to the StudyHub API.
///
/// Authorization (403) and missing-resource (404) failures get their own
/// variants because the UI renders them as distinct page states rather than
/// a generic error banner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Network-level failure with no server response (includes timeouts).
    #[error("{0}")]
    Transport(String),

    /// The server rejected the operation as forbidden (HTTP 403).
    #[error("{message}")]
    Forbidden {
        /// Message derived from the server error body.
        message: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("{message}")]
    NotFound {
        /// Message derived from the server error body.
        message: String,
    },

    /// Any other non-2xx response.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message derived from the server error body.
        message: String,
    },

    /// A 2xx response whose body could not be decoded.
    #[error("response decoding failed: {0}")]
    Decode(String),

    /// Client-side configuration problem (e.g., missing base URL).
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// The human-readable message for this error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Transport(message) | Self::Decode(message) | Self::Config(message) => message,
            Self::Forbidden { message } | Self::NotFound { message } | Self::Api { message, .. } => {
                message
            },
        }
    }

    /// Whether this error should render as the forbidden page state.
    ///
    /// The structured [`ApiError::Forbidden`] kind is authoritative. The
    /// substring checks ("403", "only manage") are a compatibility shim for
    /// errors that reach a caller as bare message text; they misclassify
    /// reworded server messages and exist only until every call site holds
    /// the structured kind.
    #[must_use]
    pub fn looks_forbidden(&self) -> bool {
        if matches!(self, Self::Forbidden { .. }) {
            return true;
        }
        let message = self.message();
        message.contains("403") || message.contains("only manage")
    }

    /// Whether this error should render as the not-found page state.
    ///
    /// Same caveats as [`ApiError::looks_forbidden`]: prefer matching on
    /// [`ApiError::NotFound`] directly.
    #[must_use]
    pub fn looks_not_found(&self) -> bool {
        if matches!(self, Self::NotFound { .. }) {
            return true;
        }
        let message = self.message();
        message.contains("404") || message.to_lowercase().contains("not found")
    }

    /// Classify a non-2xx response into an error variant.
    ///
    /// `body` is the raw response body, which may be empty, non-JSON, or a
    /// JSON value of any shape.
    #[must_use]
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let message = derive_message(status, body);
        match status {
            403 => Self::Forbidden { message },
            404 => Self::NotFound { message },
            _ => Self::Api { status, message },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Server error body shape.
///
/// All fields are optional; the server is not consistent about which it
/// sends.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
    details: Option<String>,
    #[allow(dead_code)]
    error: Option<bool>,
}

/// Derive the human-readable message for a failed response.
///
/// Preference order: body `details`, body `message`, transport-level
/// message, string coercion of the raw body value.
fn derive_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(details) = parsed.details {
            return details;
        }
        if let Some(message) = parsed.message {
            return message;
        }
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        // An object with neither field carries no usable text.
        Ok(serde_json::Value::Object(_)) | Err(_) => transport_message(status),
        // The server threw something that is not an error shape at all;
        // coerce it to text the same way the UI would.
        Ok(serde_json::Value::String(text)) => text,
        Ok(value) => value.to_string(),
    }
}

/// Generic transport-level message for a response without a usable body.
fn transport_message(status: u16) -> String {
    format!("request failed with status {status}")
}
