//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}


#[test]
fn cli_parse_global_url_and_config() {
    let cli = Cli::try_parse_from([
        "jarsub",
        "jars",
        "--url",
        "http://jm:8081",
        "--config",
        "/etc/jarsub.toml",
    ])
    .unwrap();
    assert_eq!(cli.url.as_deref(), Some("http://jm:8081"));
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/etc/jarsub.toml"))
    );
}

#[test]
fn cli_rejects_unknown_command() {
    assert!(Cli::try_parse_from(["jarsub", "explode"]).is_err());
}
