//! Request descriptors: method, URL template and upload flag per endpoint.
//!
//! Templates use `:name` placeholders. Resolution happens locally and fails
//! before any request is built when a binding is missing or malformed.

use crate::error::ClientError;
use crate::model::{JarId, JobId};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that can fill one `:KEY` slot of a template.
pub trait PathParameter {
    const KEY: &'static str;

    fn to_segment(&self) -> String;

    fn binding(&self) -> (&'static str, String) {
        (Self::KEY, self.to_segment())
    }
}

impl PathParameter for JarId {
    const KEY: &'static str = "jarid";

    fn to_segment(&self) -> String {
        self.as_str().to_string()
    }
}

impl PathParameter for JobId {
    const KEY: &'static str = "jobid";

    fn to_segment(&self) -> String {
        self.as_str().to_string()
    }
}

/// A path parameter value must be usable verbatim as one URL path segment:
/// no separators, no dot segments, and nothing curl would decode or cut at.
pub(crate) fn check_segment(key: &str, value: &str) -> Result<(), ClientError> {
    if value.is_empty() {
        return Err(ClientError::Validation(format!("{} must not be empty", key)));
    }
    if value == "." || value == ".." {
        return Err(ClientError::Validation(format!(
            "{} must be a filename only ({})",
            key, value
        )));
    }
    let bad = value.chars().find(|&c| {
        matches!(c, '/' | '\\' | '%' | '?' | '#') || c.is_whitespace() || c.is_control()
    });
    if let Some(c) = bad {
        return Err(ClientError::Validation(format!(
            "{} must be a filename only, {:?} not allowed ({:?})",
            key, c, value
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub template: &'static str,
    /// Body is sent as multipart file data rather than JSON.
    pub accepts_file_uploads: bool,
}

impl Endpoint {
    /// Upload a jar as multipart data (field content type `application/x-java-archive`).
    pub const JAR_UPLOAD: Endpoint = Endpoint {
        method: HttpMethod::Post,
        template: "/jars/upload",
        accepts_file_uploads: true,
    };
    pub const JAR_LIST: Endpoint = Endpoint {
        method: HttpMethod::Get,
        template: "/jars",
        accepts_file_uploads: false,
    };
    pub const JAR_DELETE: Endpoint = Endpoint {
        method: HttpMethod::Delete,
        template: "/jars/:jarid",
        accepts_file_uploads: false,
    };
    pub const JAR_RUN: Endpoint = Endpoint {
        method: HttpMethod::Post,
        template: "/jars/:jarid/run",
        accepts_file_uploads: false,
    };
    pub const JOB_EXCEPTIONS: Endpoint = Endpoint {
        method: HttpMethod::Get,
        template: "/jobs/:jobid/exceptions",
        accepts_file_uploads: false,
    };
    pub const JOB_STATUS: Endpoint = Endpoint {
        method: HttpMethod::Get,
        template: "/jobs/:jobid/status",
        accepts_file_uploads: false,
    };

    /// Placeholder names in template order.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        self.template
            .split('/')
            .filter_map(|seg| seg.strip_prefix(':'))
    }

    /// Substitute every placeholder with its binding.
    pub fn resolve(&self, bindings: &[(&str, String)]) -> Result<String, ClientError> {
        for (key, _) in bindings {
            if !self.placeholders().any(|p| p == *key) {
                return Err(ClientError::Validation(format!(
                    "{} has no path parameter {}",
                    self.template, key
                )));
            }
        }

        let mut path = String::with_capacity(self.template.len() + 40);
        for seg in self.template.split('/').skip(1) {
            path.push('/');
            let Some(key) = seg.strip_prefix(':') else {
                path.push_str(seg);
                continue;
            };
            let value = bindings
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
                .ok_or_else(|| {
                    ClientError::Validation(format!(
                        "path parameter {} of {} is not resolved",
                        key, self.template
                    ))
                })?;
            check_segment(key, value)?;
            path.push_str(value);
        }
        Ok(path)
    }
}
