use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{ModerationVerdict, TaskDescriptor, TaskPayload, TaskType};

use super::{client::TaskConfig, error::CoordinatorError};

#[derive(Debug, Serialize)]
pub struct TaskRequest<'a> {
    pub task_type: TaskType,
    pub payload: &'a TaskPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<&'a TaskConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TaskResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

pub fn build_request<'a>(task: &'a TaskDescriptor, config: &'a TaskConfig) -> TaskRequest<'a> {
    TaskRequest {
        task_type: task.task_type(),
        payload: task.payload(),
        config: (!config.is_empty()).then_some(config),
    }
}

/// Non-2xx statuses fail regardless of body shape; the body only contributes
/// its `error` text when it happens to parse.
pub fn parse_response(status: StatusCode, body: &[u8]) -> Result<ModerationVerdict, CoordinatorError> {
    let parsed = serde_json::from_slice::<TaskResponse>(body);

    if !status.is_success() {
        let message = parsed
            .ok()
            .and_then(|resp| resp.error)
            .filter(|msg| !msg.is_empty())
            .unwrap_or_else(|| format!("coordinator returned status {}", status.as_u16()));
        return Err(CoordinatorError::Status { status, message });
    }

    let response = parsed.map_err(|err| CoordinatorError::MalformedResponse(err.to_string()))?;

    if !response.success {
        let message = response
            .error
            .filter(|msg| !msg.is_empty())
            .unwrap_or_else(|| "coordinator reported failure without detail".to_string());
        return Err(CoordinatorError::Rejected(message));
    }

    match response.result {
        Some(Value::Null) | None => Err(CoordinatorError::MalformedResponse(
            "success response without result".to_string(),
        )),
        Some(result) => Ok(ModerationVerdict::new(result)),
    }
}
