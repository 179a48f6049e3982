use std::{collections::BTreeMap, time::Duration};

use async_trait::async_trait;
use reqwest::{header, Client};
use tokio::time::{sleep, Instant};
use url::Url;

use crate::{
    config::{ConfigError, CoordinatorConfig},
    domain::{ModerationVerdict, TaskDescriptor},
};

use super::{
    error::CoordinatorError,
    protocol::{build_request, parse_response, TaskRequest},
};

pub type TaskConfig = BTreeMap<String, String>;

/// Executes one moderation task against the coordinator.
#[async_trait]
pub trait TaskRunner: Send + Sync {
    async fn run_task(
        &self,
        task: &TaskDescriptor,
        config: &TaskConfig,
    ) -> Result<ModerationVerdict, CoordinatorError>;
}

#[derive(Clone)]
pub struct CoordinatorClient {
    http: Client,
    endpoint: Url,
    timeout: Duration,
}

impl CoordinatorClient {
    pub fn new(http: Client, config: &CoordinatorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http,
            endpoint: config.task_endpoint()?,
            timeout: config.request_timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn send(&self, request: &TaskRequest<'_>) -> Result<ModerationVerdict, CoordinatorError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(target: "coordinator", error = %err, "coordinator request failed");
                CoordinatorError::transport(&err)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            tracing::warn!(
                target: "coordinator",
                error = %err,
                status = status.as_u16(),
                "failed to read coordinator response body"
            );
            CoordinatorError::transport(&err)
        })?;

        parse_response(status, &body)
    }
}

#[async_trait]
impl TaskRunner for CoordinatorClient {
    async fn run_task(
        &self,
        task: &TaskDescriptor,
        config: &TaskConfig,
    ) -> Result<ModerationVerdict, CoordinatorError> {
        let request = build_request(task, config);
        tracing::debug!(
            target: "coordinator",
            task_type = task.task_type().as_str(),
            endpoint = %self.endpoint,
            "sending task to coordinator"
        );

        let started = Instant::now();
        // Whichever branch loses is dropped here: the in-flight request closes
        // its connection and the deadline timer is released.
        let outcome = tokio::select! {
            res = self.send(&request) => res,
            _ = sleep(self.timeout) => Err(CoordinatorError::Timeout(self.timeout)),
        };

        tracing::debug!(
            target: "coordinator",
            task_type = task.task_type().as_str(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            ok = outcome.is_ok(),
            timed_out = outcome.as_ref().err().is_some_and(CoordinatorError::is_timeout),
            "coordinator call settled"
        );
        outcome
    }
}
