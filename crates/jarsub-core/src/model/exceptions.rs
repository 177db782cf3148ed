//! Exception snapshot of a job (`GET /jobs/:jobid/exceptions`).

use serde::{Deserialize, Serialize};

/// Root cause plus the (possibly truncated) list of task failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobExceptionsInfo {
    #[serde(rename = "root-exception", default)]
    pub root_exception: Option<String>,
    /// Epoch millis of the root exception.
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(rename = "all-exceptions", default)]
    pub all_exceptions: Vec<TaskException>,
    /// True when the server cut `all_exceptions` short.
    #[serde(default)]
    pub truncated: bool,
    #[serde(rename = "exceptionHistory", default)]
    pub exception_history: Option<ExceptionHistory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskException {
    pub exception: String,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExceptionHistory {
    #[serde(default)]
    pub entries: Vec<ExceptionHistoryEntry>,
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionHistoryEntry {
    pub exception_name: String,
    #[serde(default)]
    pub stacktrace: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub task_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl JobExceptionsInfo {
    /// First line of the root exception, if any.
    pub fn root_cause_summary(&self) -> Option<&str> {
        self.root_exception
            .as_deref()
            .and_then(|s| s.lines().next())
            .map(str::trim)
    }
}
