use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::net::TcpListener;

use crate::{
    config::AppConfig,
    coordinator::CoordinatorClient,
    dispatch::Dispatcher,
    http::{moderation_routes, AppState},
    infrastructure::shutdown::Shutdown,
};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct ModerationApp {
    config: Arc<AppConfig>,
    router: axum::Router,
    shutdown: Shutdown,
}

impl ModerationApp {
    pub fn initialize(config: AppConfig, shutdown: Shutdown) -> Result<Self> {
        let config = Arc::new(config);

        let http_client = Client::builder()
            .user_agent(format!("moderation-dispatcher/{}", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT.min(config.coordinator.request_timeout))
            .build()
            .context("failed to build coordinator HTTP client")?;

        let coordinator = CoordinatorClient::new(http_client, &config.coordinator)?;
        tracing::info!(
            target: "coordinator",
            endpoint = %coordinator.endpoint(),
            timeout_ms = config.coordinator.request_timeout.as_millis() as u64,
            "coordinator client ready"
        );

        let dispatcher = Arc::new(Dispatcher::new(
            Arc::new(coordinator),
            config.coordinator.task_config.clone(),
        ));

        let router = moderation_routes(AppState {
            dispatcher,
            service_name: Arc::from(config.service_name.as_str()),
        });

        Ok(Self {
            config,
            router,
            shutdown,
        })
    }

    pub async fn run(self) -> Result<()> {
        let ModerationApp {
            config,
            router,
            shutdown,
        } = self;

        let address = config.server.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind {address}"))?;

        tracing::info!(
            address = %listener.local_addr()?,
            service = %config.service_name,
            "moderation service listening"
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown.subscribe().notified())
            .await
            .context("moderation server failed")?;

        tracing::info!("moderation service stopped");
        Ok(())
    }
}
