//! `jarsub status <job-id>` – print the job status.

use anyhow::Result;
use jarsub_core::model::JobId;
use jarsub_core::JobClient;
use std::sync::Arc;

use super::blocking;

pub async fn run_status(client: &Arc<JobClient>, job_id: &str) -> Result<()> {
    let id = JobId::parse(job_id)?;
    let status = blocking(client, move |c| c.job_status(&id)).await?;
    println!("{}", status.as_str());
    Ok(())
}
