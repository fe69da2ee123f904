//! Error types for daktela-client.
//!
//! Every failure of an HTTP round trip ends up as an [`Error`]. The
//! [`ErrorKind`] separates failures that never produced a response
//! (timeouts, connection and other transport problems) from responses with a
//! non-2xx status, which keep the status code and the `error` payload the
//! Daktela API attached to the body.

use std::sync::LazyLock;

use serde_json::Value;

/// Result type alias for daktela-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for daktela-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// The original failure, kept for diagnostics.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// HTTP status of the response, if the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The `error` payload returned by the API, if any.
    pub fn api_error(&self) -> Option<&Value> {
        match &self.kind {
            ErrorKind::Http { api_error, .. } => api_error.as_ref(),
            _ => None,
        }
    }

    /// Human readable message of the underlying failure.
    pub fn message(&self) -> String {
        match &self.kind {
            ErrorKind::Http { message, .. }
            | ErrorKind::Timeout(message)
            | ErrorKind::Connection(message)
            | ErrorKind::Transport(message) => message.clone(),
            kind => kind.to_string(),
        }
    }

    /// Returns true if no response was received at all.
    pub fn is_transport(&self) -> bool {
        self.kind.is_transport()
    }

    /// Returns true if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout(_))
    }

    /// Returns true if the API answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns true if the API rejected the credentials (401 or 403).
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The API answered with a non-2xx status.
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        message: String,
        api_error: Option<Value>,
    },

    /// Request timeout.
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Any other failure before a response was received.
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Required environment variable is missing.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),
}

impl ErrorKind {
    /// Returns true if this kind describes a failure without any response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ErrorKind::Timeout(_) | ErrorKind::Connection(_) | ErrorKind::Transport(_)
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let message = sanitize_error_message(&err.to_string());
        let kind = if err.is_timeout() {
            ErrorKind::Timeout(message)
        } else if err.is_connect() {
            ErrorKind::Connection(message)
        } else if let Some(status) = err.status() {
            ErrorKind::Http {
                status: status.as_u16(),
                message,
                api_error: None,
            }
        } else {
            ErrorKind::Transport(message)
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}

static ACCESS_TOKEN_PARAM: LazyLock<regex_lite::Regex> =
    LazyLock::new(|| regex_lite::Regex::new(r"accessToken=[^&\s)]+").expect("valid regex"));

static SESSION_COOKIE: LazyLock<regex_lite::Regex> =
    LazyLock::new(|| regex_lite::Regex::new(r"c_user=[^;\s)]+").expect("valid regex"));

/// Sanitize an error message so that credentials never reach logs.
///
/// Transport errors render the request URL, which carries the access token
/// when query-token authentication is used.
pub(crate) fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let sanitized = ACCESS_TOKEN_PARAM.replace_all(message, "accessToken=[REDACTED]");
    let mut sanitized = SESSION_COOKIE
        .replace_all(&sanitized, "c_user=[REDACTED]")
        .to_string();

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}
