mod app;
mod config;
mod coordinator;
mod dispatch;
mod domain;
mod http;
mod infrastructure;

use anyhow::Result;
use infrastructure::{directories, logging, shutdown};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_config()?;
    let logs_dir = directories::ensure_logs_dir(&config.logging)?;
    logging::init_tracing(&config.logging, logs_dir.as_deref())?;

    let shutdown = shutdown::Shutdown::new();
    shutdown::install_signal_handlers(shutdown.clone());

    let app = app::ModerationApp::initialize(config, shutdown)?;
    app.run().await
}
