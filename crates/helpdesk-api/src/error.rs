//! Error type shared by every client operation.
//!
//! The backend has no structured error envelope, so failures are split only
//! by where they happened: on the wire, in the status line, or while decoding
//! the body.

use reqwest::StatusCode;

/// Errors returned by [`HelpdeskClient`](crate::HelpdeskClient) operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection failure, timeout, or any other transport-level error.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {}", summarize_body(.body))]
    Status {
        /// Status code of the response.
        status: StatusCode,
        /// Raw response body, possibly empty.
        body: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to parse response JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// An endpoint URL could not be built.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The configured base URL cannot carry path segments.
    #[error("Base URL cannot be used for API requests: {0}")]
    InvalidBaseUrl(String),

    /// A request interceptor refused to let the request through.
    #[error("Request rejected: {0}")]
    Rejected(String),
}

impl ApiError {
    /// Creates a `Status` error.
    #[must_use]
    pub fn status(status: StatusCode, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Creates a `Rejected` error, for use by interceptors.
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Returns the HTTP status carried by this error, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Returns `true` for a 401 response.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Returns `true` for a 404 response.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(StatusCode::NOT_FOUND)
    }

    /// Returns `true` if the request hit the configured deadline.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

/// Spring error bodies carry a `message` (or at least an `error`) field;
/// prefer it over dumping the whole document.
fn summarize_body(body: &str) -> String {
    if body.is_empty() {
        return "(empty body)".to_string();
    }
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = json.get(key).and_then(|v| v.as_str())
                && !msg.is_empty()
            {
                return msg.to_string();
            }
        }
    }
    body.to_string()
}
