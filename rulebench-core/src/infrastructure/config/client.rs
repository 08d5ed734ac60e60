// rulebench-core/src/infrastructure/config/client.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::error::RulebenchError;
use crate::infrastructure::error::InfrastructureError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const ENV_BASE_URL: &str = "RULEBENCH_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "RULEBENCH_TIMEOUT_SECS";

const CONFIG_CANDIDATES: [&str; 2] = ["rulebench.yaml", "rulebench.yml"];

#[derive(Debug, Deserialize, Serialize, Clone, Default, Validate)]
pub struct ClientConfig {
    #[serde(default)]
    #[validate(nested)]
    pub api: ApiConfig,
}

/// Where the rules service lives and how long we are willing to wait for it.
#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
#[serde(rename_all = "kebab-case")]
pub struct ApiConfig {
    /// Includes the `/api` prefix; resource paths are appended to it.
    #[serde(default = "default_base_url")]
    #[validate(url)]
    pub base_url: String,

    /// No request timeout unless set: the transport is the only ceiling.
    #[serde(default)]
    #[validate(range(min = 1))]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_connect_timeout_secs")]
    #[validate(range(min = 1))]
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl ClientConfig {
    pub fn check(&self) -> Result<(), InfrastructureError> {
        self.validate()
            .map_err(|e| InfrastructureError::ConfigError(e.to_string()))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_connect_timeout_secs() -> u64 {
    10
}

// --- LOADER ---

/// Loads `rulebench.yaml` from `config_dir` (defaults when absent), then
/// layers environment overrides on top and validates the result.
#[instrument]
pub fn load_client_config(config_dir: &Path) -> Result<ClientConfig, RulebenchError> {
    let mut config = match find_config_file(config_dir) {
        Some(path) => {
            info!(path = ?path, "Loading client configuration");
            parse_config(&fs::read_to_string(&path)?)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            ClientConfig::default()
        }
    };

    // RULEBENCH_BASE_URL=http://rules.internal/api rulebench list
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    config.check()?;
    Ok(config)
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.exists())
}

fn parse_config(content: &str) -> Result<ClientConfig, InfrastructureError> {
    if content.trim().is_empty() {
        return Ok(ClientConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Env layering. `lookup` is injected so tests never touch the process environment.
pub fn apply_env_overrides<F>(config: &mut ClientConfig, lookup: F) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(ENV_BASE_URL) {
        info!(old = ?config.api.base_url, new = ?val, "Overriding base URL via ENV");
        config.api.base_url = val;
    }
    if let Some(val) = lookup(ENV_TIMEOUT_SECS) {
        let secs = val.trim().parse::<u64>().map_err(|_| {
            InfrastructureError::ConfigError(format!(
                "{} must be a number of seconds, got '{}'",
                ENV_TIMEOUT_SECS, val
            ))
        })?;
        info!(secs, "Overriding request timeout via ENV");
        config.api.timeout_secs = Some(secs);
    }
    Ok(())
}
