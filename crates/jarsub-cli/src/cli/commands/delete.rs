//! `jarsub delete <jar-id>` – remove an uploaded jar.

use anyhow::Result;
use jarsub_core::JobClient;
use std::sync::Arc;

use super::blocking;

pub async fn run_delete(client: &Arc<JobClient>, jar_id: String) -> Result<()> {
    let id = jar_id.clone();
    blocking(client, move |c| c.delete_jar(&id)).await?;
    println!("Deleted jar {jar_id}");
    Ok(())
}
