//! `jarsub running <job-id>` – print whether the job is still running.

use anyhow::Result;
use jarsub_core::model::JobId;
use jarsub_core::JobClient;
use std::sync::Arc;

use super::blocking;

pub async fn run_running(client: &Arc<JobClient>, job_id: &str) -> Result<()> {
    let id = JobId::parse(job_id)?;
    let running = blocking(client, move |c| c.is_job_running(&id)).await?;
    println!("{running}");
    Ok(())
}
