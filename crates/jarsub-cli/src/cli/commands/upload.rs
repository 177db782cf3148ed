//! `jarsub upload <path>` – upload a jar and print its id.

use anyhow::Result;
use jarsub_core::JobClient;
use std::path::PathBuf;
use std::sync::Arc;

use super::blocking;

pub async fn run_upload(client: &Arc<JobClient>, path: PathBuf) -> Result<()> {
    let jar_id = blocking(client, move |c| c.upload_jar(&path)).await?;
    println!("{jar_id}");
    Ok(())
}
