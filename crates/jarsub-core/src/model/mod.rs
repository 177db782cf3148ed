//! Value types exchanged with the cluster REST API.
//!
//! Everything here is owned by the caller; the client keeps none of it
//! between calls.

mod exceptions;
mod ids;
mod jar;
mod job_status;

pub use exceptions::{ExceptionHistory, ExceptionHistoryEntry, JobExceptionsInfo, TaskException};
pub use ids::{JarId, JobId};
pub use jar::{JarEntryPoint, JarFileInfo, JarList, JarRunResponse, JarUploadResponse, JobRunRequest};
pub use job_status::{JobStatus, JobStatusInfo};
