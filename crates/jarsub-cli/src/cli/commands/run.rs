//! `jarsub run <jar-id> [--entry-class C] ...` – submit a job from an uploaded jar.

use anyhow::Result;
use clap::Args;
use jarsub_core::model::JobRunRequest;
use jarsub_core::JobClient;
use std::sync::Arc;

use super::blocking;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Jar id (bare filename returned by upload).
    pub jar_id: String,

    /// Fully qualified main class; the jar manifest's Main-Class when omitted.
    #[arg(long, value_name = "CLASS")]
    pub entry_class: Option<String>,

    /// Program argument; repeat for several, order is kept.
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Job parallelism; cluster default when omitted.
    #[arg(long, value_name = "N")]
    pub parallelism: Option<u32>,

    /// Allow skipping savepoint state that cannot be mapped to the new program.
    #[arg(long)]
    pub allow_non_restored_state: bool,

    /// Savepoint to restore from.
    #[arg(long, value_name = "PATH")]
    pub savepoint_path: Option<String>,
}

impl RunArgs {
    pub fn to_request(&self) -> JobRunRequest {
        let mut req = JobRunRequest {
            entry_class: self.entry_class.clone(),
            ..JobRunRequest::default()
        }
        .args(self.args.iter().cloned());
        if let Some(p) = self.parallelism {
            req = req.parallelism(p);
        }
        // Only sent when the flag is given, so the cluster default applies otherwise.
        if self.allow_non_restored_state {
            req = req.allow_non_restored_state(true);
        }
        if let Some(path) = &self.savepoint_path {
            req = req.savepoint_path(path);
        }
        req
    }
}

pub async fn run_job(client: &Arc<JobClient>, args: RunArgs) -> Result<()> {
    let request = args.to_request();
    let jar_id = args.jar_id;
    let job_id = blocking(client, move |c| c.run_job(&jar_id, &request)).await?;
    println!("{job_id}");
    Ok(())
}
