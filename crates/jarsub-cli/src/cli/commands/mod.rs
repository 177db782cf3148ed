//! CLI command handlers. Each command is in its own file.
//!
//! The client is blocking (libcurl), so every call is moved onto tokio's
//! blocking pool.

mod completions;
mod delete;
mod exceptions;
mod jars;
mod run;
mod running;
mod status;
mod upload;
mod wait;

pub use completions::run_completions;
pub use delete::run_delete;
pub use exceptions::run_exceptions;
pub use jars::run_jars;
pub use run::{run_job, RunArgs};
pub use running::run_running;
pub use status::run_status;
pub use upload::run_upload;
pub use wait::run_wait;

use anyhow::Result;
use jarsub_core::{ClientError, JobClient};
use std::sync::Arc;

/// Run one client call on the blocking pool.
pub(crate) async fn blocking<T, F>(client: &Arc<JobClient>, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&JobClient) -> Result<T, ClientError> + Send + 'static,
{
    let client = Arc::clone(client);
    let out = tokio::task::spawn_blocking(move || f(&client)).await??;
    Ok(out)
}
