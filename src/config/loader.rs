use std::{collections::BTreeMap, env, time::Duration};

use url::Url;

use super::env::{AppConfig, ConfigError, CoordinatorConfig, LoggingConfig, ServerConfig};

const DEFAULT_PORT: u16 = 8082;
const DEFAULT_TIMEOUT_MS: u64 = 20_000;
const DEFAULT_SERVICE_NAME: &str = "Moderation Service";

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_lookup(|key| env::var(key).ok())
}

impl AppConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_url = var("AI_COORDINATOR_URL").ok_or(ConfigError::Missing("AI_COORDINATOR_URL"))?;
        let base_url = parse_coordinator_url(raw_url.trim())?;

        let request_timeout = match var("AI_REQUEST_TIMEOUT_MS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "AI_REQUEST_TIMEOUT_MS",
                        reason: format!("expected a positive number of milliseconds, got {value:?}"),
                    })
                }
            },
            None => Duration::from_millis(DEFAULT_TIMEOUT_MS),
        };

        let mut task_config = BTreeMap::new();
        if let Some(model) = var("MODERATION_MODEL") {
            task_config.insert("model".to_string(), model.trim().to_string());
        }

        let port = match var("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                reason: format!("not a valid port: {value:?}"),
            })?,
            None => DEFAULT_PORT,
        };

        let server = ServerConfig {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
        };

        let logging = LoggingConfig {
            level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            logs_dir: var("LOGS_DIR"),
        };

        Ok(Self {
            service_name: var("SERVICE_NAME").unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            server,
            coordinator: CoordinatorConfig {
                base_url,
                request_timeout,
                task_config,
            },
            logging,
        })
    }
}

fn parse_coordinator_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|err| ConfigError::Invalid {
        key: "AI_COORDINATOR_URL",
        reason: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            key: "AI_COORDINATOR_URL",
            reason: format!("unsupported scheme {:?}", url.scheme()),
        });
    }
    Ok(url)
}
