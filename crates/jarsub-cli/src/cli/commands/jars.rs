//! `jarsub jars` – list uploaded jars.

use anyhow::Result;
use jarsub_core::JobClient;
use std::sync::Arc;

use super::blocking;

pub async fn run_jars(client: &Arc<JobClient>) -> Result<()> {
    let list = blocking(client, |c| c.list_jars()).await?;
    if list.files.is_empty() {
        println!("No jars uploaded.");
        return Ok(());
    }
    println!("{:<48} {:<24} {}", "ID", "NAME", "ENTRY");
    for f in list.files {
        let entry = f
            .entry
            .first()
            .map(|e| e.name.as_str())
            .unwrap_or("-");
        println!("{:<48} {:<24} {}", f.id, f.name, entry);
    }
    Ok(())
}
