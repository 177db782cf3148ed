//! HTTP transport seam.
//!
//! The client facade only talks to `Transport`; `CurlTransport` is the real
//! implementation and tests swap in scripted ones.

mod easy;
mod response;

pub use easy::CurlTransport;
pub use response::HttpResponse;

use crate::descriptor::HttpMethod;
use crate::error::ClientError;
use std::path::PathBuf;

/// MIME type the cluster expects on the jar part of an upload.
pub const CONTENT_TYPE_JAR: &str = "application/x-java-archive";

/// Multipart field name for uploaded jars.
pub const JAR_FIELD: &str = "jarfile";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub field: String,
    pub path: PathBuf,
    pub content_type: String,
}

impl FileUpload {
    pub fn jar(path: impl Into<PathBuf>) -> Self {
        Self {
            field: JAR_FIELD.to_string(),
            path: path.into(),
            content_type: CONTENT_TYPE_JAR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    Json(Vec<u8>),
    Multipart(Vec<FileUpload>),
}

/// A fully resolved request: path is relative to the transport's base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: RequestBody,
}

/// Issues one HTTP exchange.
///
/// Returns `Ok` for every status the server sends; only failures to get a
/// response at all (connect, timeout, setup) are `Err`.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError>;
}
