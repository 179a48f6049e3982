pub mod env;
mod loader;

pub use env::{AppConfig, ConfigError, CoordinatorConfig, LoggingConfig};
pub use loader::load_config;
