//! `jarsub wait <job-id>` – block until the job is terminal and print its final status.

use anyhow::Result;
use jarsub_core::model::{JobId, JobStatus};
use jarsub_core::JobClient;
use std::sync::Arc;
use std::time::Duration;

use super::blocking;

pub async fn run_wait(
    client: &Arc<JobClient>,
    job_id: &str,
    interval_secs: u64,
    timeout_secs: u64,
) -> Result<()> {
    let id = JobId::parse(job_id)?;
    let interval = Duration::from_secs(interval_secs.max(1));
    let timeout = Duration::from_secs(timeout_secs);
    let status = blocking(client, move |c| c.wait_for_terminal(&id, interval, timeout)).await?;
    println!("{}", status.as_str());
    if let Some(note) = resume_note(status) {
        tracing::warn!(job_id = %job_id, "{}", note);
        eprintln!("{}", note);
    }
    Ok(())
}

/// Terminal here but not globally: another cluster process may pick the job up again.
fn resume_note(status: JobStatus) -> Option<&'static str> {
    if status.is_globally_terminal() {
        None
    } else {
        Some("job is suspended; it may resume after a failover")
    }
}
