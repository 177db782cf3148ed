//! Response status mapping.

use crate::error::ClientError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Error body the cluster sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

impl HttpResponse {
    pub fn new(status: u32, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Human-readable server message: joined `errors[]` if present, raw body otherwise.
    pub fn error_message(&self) -> String {
        if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(&self.body) {
            if !parsed.errors.is_empty() {
                return parsed.errors.join("; ");
            }
        }
        String::from_utf8_lossy(&self.body).trim().to_string()
    }

    /// Map non-2xx statuses onto the error taxonomy.
    pub fn into_result(self) -> Result<HttpResponse, ClientError> {
        if self.is_success() {
            return Ok(self);
        }
        let message = self.error_message();
        Err(match self.status {
            404 => ClientError::NotFound(message),
            503 => ClientError::ServiceUnavailable(message),
            status => ClientError::Server { status, message },
        })
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
