//! `jarsub exceptions <job-id>` – dump the job's exception snapshot as JSON.

use anyhow::Result;
use jarsub_core::model::JobId;
use jarsub_core::JobClient;
use std::sync::Arc;

use super::blocking;

pub async fn run_exceptions(client: &Arc<JobClient>, job_id: &str) -> Result<()> {
    let id = JobId::parse(job_id)?;
    let info = blocking(client, move |c| c.job_exceptions(&id)).await?;
    if let Some(summary) = info.root_cause_summary() {
        tracing::debug!("root cause: {}", summary);
    }
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
