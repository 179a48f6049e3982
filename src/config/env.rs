use std::{collections::BTreeMap, time::Duration};

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub service_name: String,
    pub server: ServerConfig,
    pub coordinator: CoordinatorConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    pub base_url: Url,
    pub request_timeout: Duration,
    /// Forwarded verbatim as the outbound `config` object; omitted when empty.
    pub task_config: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub logs_dir: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl CoordinatorConfig {
    pub fn task_endpoint(&self) -> Result<Url, ConfigError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/process")).map_err(|err| ConfigError::Invalid {
            key: "AI_COORDINATOR_URL",
            reason: err.to_string(),
        })
    }
}
