//! Classify client errors into retry policy error kinds.

use super::policy::ErrorKind;
use crate::error::ClientError;

/// Classify a curl transfer error.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}

/// Classify a failed attempt. Only connection problems and 503 are retryable.
pub fn classify(e: &ClientError) -> ErrorKind {
    match e {
        ClientError::Connection(ce) => classify_curl_error(ce),
        ClientError::ServiceUnavailable(_) => ErrorKind::ServiceUnavailable,
        ClientError::Timeout => ErrorKind::Timeout,
        ClientError::Validation(_)
        | ClientError::NotFound(_)
        | ClientError::Server { .. }
        | ClientError::Io { .. }
        | ClientError::Decode(_)
        | ClientError::Encode(_)
        | ClientError::Setup(_) => ErrorKind::Other,
    }
}
