use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::{ExponentialWait, RetryPolicy};

/// Environment variable that overrides `base_url` from the config file.
pub const URL_ENV: &str = "JARSUB_URL";

/// Retry policy parameters for retriable calls (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
    /// Give up once this much time has passed since the first attempt.
    #[serde(default)]
    pub max_elapsed_secs: Option<u64>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_secs: 0.25,
            max_delay_secs: 30,
            max_elapsed_secs: None,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> RetryPolicy<ExponentialWait> {
        RetryPolicy {
            max_attempts: self.max_attempts.max(1),
            max_elapsed: self.max_elapsed_secs.map(Duration::from_secs),
            wait: ExponentialWait {
                base: Duration::try_from_secs_f64(self.base_delay_secs)
                    .unwrap_or(Duration::from_millis(250)),
                max: Duration::from_secs(self.max_delay_secs),
            },
        }
    }
}

/// Client configuration loaded from `~/.config/jarsub/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// REST endpoint of the cluster (e.g. `http://jobmanager:8081`).
    pub base_url: String,
    pub connect_timeout_secs: u64,
    /// Per-attempt bound on a whole request, including body transfer.
    pub request_timeout_secs: u64,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 60,
            retry: None,
        }
    }
}

impl ClientConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy<ExponentialWait> {
        self.retry.clone().unwrap_or_default().to_policy()
    }

    /// Override `base_url`: a non-blank `env_url` (from `JARSUB_URL`) beats the
    /// file, and `cli_url` beats both. Call `validate` afterwards.
    pub fn apply_url_overrides(&mut self, env_url: Option<&str>, cli_url: Option<&str>) {
        let env_url = env_url.map(str::trim).filter(|u| !u.is_empty());
        if let Some(url) = cli_url.or(env_url) {
            self.base_url = url.to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)
            .with_context(|| format!("invalid base_url {:?}", self.base_url))?;
        Ok(())
    }
}

/// Value of `JARSUB_URL`, if set.
pub fn env_url() -> Option<String> {
    std::env::var(URL_ENV).ok()
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("jarsub")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<ClientConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: ClientConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ClientConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ClientConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.base_url, "http://localhost:8081");
        assert_eq!(cfg.connect_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.request_timeout(), Duration::from_secs(60));
        assert!(cfg.retry.is_none());
        assert_eq!(cfg.retry_policy().max_attempts, 5);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ClientConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ClientConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.base_url, cfg.base_url);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
    }

    #[test]
    fn config_toml_retry_section() {
        let toml = r#"
            base_url = "https://flink.internal:8443"
            connect_timeout_secs = 3
            request_timeout_secs = 20

            [retry]
            max_attempts = 3
            base_delay_secs = 0.5
            max_delay_secs = 15
            max_elapsed_secs = 60
        "#;
        let cfg: ClientConfig = toml::from_str(toml).unwrap();
        let policy = cfg.retry_policy();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.max_elapsed, Some(Duration::from_secs(60)));
        assert_eq!(policy.wait.base, Duration::from_millis(500));
        assert_eq!(policy.wait.max, Duration::from_secs(15));
    }

    #[test]
    fn blank_env_url_is_ignored() {
        for blank in ["", "   ", "\t\n"] {
            let mut cfg = ClientConfig::default();
            cfg.apply_url_overrides(Some(blank), None);
            assert_eq!(cfg.base_url, "http://localhost:8081");
        }
    }

    #[test]
    fn env_url_beats_file_and_is_trimmed() {
        let mut cfg = ClientConfig::default();
        cfg.apply_url_overrides(Some("  http://env-jm:8081 "), None);
        assert_eq!(cfg.base_url, "http://env-jm:8081");
    }

    #[test]
    fn cli_url_beats_env_url() {
        let mut cfg = ClientConfig::default();
        cfg.apply_url_overrides(Some("http://env-jm:8081"), Some("http://cli-jm:8081"));
        assert_eq!(cfg.base_url, "http://cli-jm:8081");

        let mut cfg = ClientConfig::default();
        cfg.apply_url_overrides(Some(""), Some("http://cli-jm:8081"));
        assert_eq!(cfg.base_url, "http://cli-jm:8081");
    }

    #[test]
    fn invalid_override_fails_validation() {
        let mut cfg = ClientConfig::default();
        cfg.apply_url_overrides(None, Some("not a url"));
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn load_from_path_rejects_bad_url() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        use std::io::Write;
        writeln!(
            f,
            "base_url = \"::nope\"\nconnect_timeout_secs = 1\nrequest_timeout_secs = 1"
        )
        .unwrap();
        assert!(load_from_path(f.path()).is_err());
    }

    #[test]
    fn load_from_path_reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        use std::io::Write;
        writeln!(
            f,
            "base_url = \"http://10.0.0.5:8081\"\nconnect_timeout_secs = 1\nrequest_timeout_secs = 2"
        )
        .unwrap();
        let cfg = load_from_path(f.path()).unwrap();
        assert_eq!(cfg.base_url, "http://10.0.0.5:8081");
        assert_eq!(cfg.request_timeout(), Duration::from_secs(2));
    }
}
