//! Error type shared by every remote operation.
//!
//! Callers can match on the variant to tell local input problems (never sent
//! over the wire) from transport failures and server rejections.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Bad local input, rejected before any request is made.
    #[error("invalid argument: {0}")]
    Validation(String),

    /// Transport failure (refused connection, DNS, reset, etc.).
    #[error("connection failed: {0}")]
    Connection(#[source] curl::Error),

    /// Server answered 503.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Server answered 404 (unknown job or jar).
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response.
    #[error("server returned HTTP {status}: {message}")]
    Server { status: u32, message: String },

    /// No response within the configured per-attempt bound.
    #[error("request timed out")]
    Timeout,

    /// Local file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request body could not be serialized.
    #[error("cannot encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Curl rejected an option before the request was sent (bad URL, form error).
    #[error("request setup failed: {0}")]
    Setup(String),
}

impl From<curl::FormError> for ClientError {
    fn from(e: curl::FormError) -> Self {
        ClientError::Setup(e.to_string())
    }
}
