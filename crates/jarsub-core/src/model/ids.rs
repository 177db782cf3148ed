//! Job and jar identifiers.

use crate::descriptor::check_segment;
use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Server-assigned job id: 16 bytes rendered as 32 hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobId(String);

impl JobId {
    const HEX_LEN: usize = 32;

    pub fn parse(s: &str) -> Result<Self, ClientError> {
        let s = s.trim();
        if s.len() != Self::HEX_LEN || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ClientError::Validation(format!(
                "job id must be {} hex characters ({:?})",
                Self::HEX_LEN,
                s
            )));
        }
        Ok(JobId(s.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for JobId {
    type Error = ClientError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        JobId::parse(&s)
    }
}

impl From<JobId> for String {
    fn from(id: JobId) -> Self {
        id.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an uploaded jar: the bare filename the server stored it under.
///
/// Never contains a directory component or a character a URL would treat
/// specially (`%`, `?`, `#`, whitespace), so it is safe to splice into a path
/// segment as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JarId(String);

impl JarId {
    pub fn parse(s: &str) -> Result<Self, ClientError> {
        check_segment("jarid", s)?;
        Ok(JarId(s.to_string()))
    }

    /// Derive the id from the storage path returned by an upload: its last component.
    pub fn from_upload_path(path: &str) -> Result<Self, ClientError> {
        let name = Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                ClientError::Validation(format!("upload path has no filename ({})", path))
            })?;
        JarId::parse(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for JarId {
    type Error = ClientError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        JarId::parse(&s)
    }
}

impl From<JarId> for String {
    fn from(id: JarId) -> Self {
        id.0
    }
}

impl fmt::Display for JarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
