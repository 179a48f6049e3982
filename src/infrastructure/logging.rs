use std::{io, path::Path};

use anyhow::Result;
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

static INIT: OnceCell<()> = OnceCell::new();
static GUARD: OnceCell<tracing_appender::non_blocking::WorkerGuard> = OnceCell::new();

pub fn init_tracing(config: &LoggingConfig, logs_dir: Option<&Path>) -> Result<()> {
    INIT.get_or_try_init::<_, anyhow::Error>(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let console_layer = fmt::layer()
            .with_writer(io::stdout)
            .with_target(true)
            .with_ansi(true);

        let file_layer = logs_dir.map(|dir| {
            let file_appender = tracing_appender::rolling::daily(dir, "moderation.log");
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
            let _ = GUARD.set(guard);
            fmt::layer()
                .with_writer(file_writer)
                .with_target(true)
                .with_ansi(false)
        });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()?;

        match logs_dir {
            Some(dir) => tracing::info!(logs = %dir.display(), "tracing initialized"),
            None => tracing::info!("tracing initialized (console only)"),
        }
        Ok(())
    })?;
    Ok(())
}
