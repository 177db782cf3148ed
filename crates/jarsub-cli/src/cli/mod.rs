//! CLI for the jarsub cluster job client.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use jarsub_core::config::{self, ClientConfig};
use jarsub_core::JobClient;
use std::path::PathBuf;
use std::sync::Arc;

use commands::{
    run_completions, run_delete, run_exceptions, run_jars, run_job, run_running, run_status,
    run_upload, run_wait, RunArgs,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "jarsub")]
#[command(about = "jarsub: upload, run and inspect jobs on a cluster REST endpoint", long_about = None)]
pub struct Cli {
    /// Cluster REST URL (overrides config file and JARSUB_URL).
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Read configuration from this file instead of the XDG config path.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Upload a jar and print its jar id.
    Upload {
        /// Path to the jar file.
        path: PathBuf,
    },

    /// List uploaded jars.
    Jars,

    /// Delete an uploaded jar.
    Delete {
        /// Jar id (bare filename returned by upload).
        jar_id: String,
    },

    /// Run an uploaded jar as a new job and print the job id.
    Run(RunArgs),

    /// Print the current status of a job.
    Status {
        /// Job id (32 hex characters).
        job_id: String,
    },

    /// Print true if the job has not reached a terminal status.
    Running {
        /// Job id (32 hex characters).
        job_id: String,
    },

    /// Print the exception snapshot of a job as JSON.
    Exceptions {
        /// Job id (32 hex characters).
        job_id: String,
    },

    /// Poll a job until it reaches a terminal status.
    Wait {
        /// Job id (32 hex characters).
        job_id: String,
        /// Seconds between status polls.
        #[arg(long, default_value = "2", value_name = "SECS")]
        interval_secs: u64,
        /// Give up after this many seconds.
        #[arg(long, default_value = "600", value_name = "SECS")]
        timeout_secs: u64,
    },

    /// Print a shell completion script.
    Completions {
        shell: Shell,
    },
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(());
        }

        let cfg = cli.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let client = Arc::new(
            JobClient::from_config(&cfg)
                .with_context(|| format!("cannot use cluster URL {}", cfg.base_url))?,
        );

        match cli.command {
            CliCommand::Upload { path } => run_upload(&client, path).await?,
            CliCommand::Jars => run_jars(&client).await?,
            CliCommand::Delete { jar_id } => run_delete(&client, jar_id).await?,
            CliCommand::Run(args) => run_job(&client, args).await?,
            CliCommand::Status { job_id } => run_status(&client, &job_id).await?,
            CliCommand::Running { job_id } => run_running(&client, &job_id).await?,
            CliCommand::Exceptions { job_id } => run_exceptions(&client, &job_id).await?,
            CliCommand::Wait {
                job_id,
                interval_secs,
                timeout_secs,
            } => run_wait(&client, &job_id, interval_secs, timeout_secs).await?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }

    /// Config file, then `JARSUB_URL`, then `--url`.
    fn load_config(&self) -> Result<ClientConfig> {
        self.resolve_config(config::env_url().as_deref())
    }

    /// `load_config` with the `JARSUB_URL` value passed in.
    pub(crate) fn resolve_config(&self, env_url: Option<&str>) -> Result<ClientConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        cfg.apply_url_overrides(env_url, self.url.as_deref());
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests;
