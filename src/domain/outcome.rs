use serde::Serialize;
use serde_json::Value;

use super::input::InputError;

/// Coordinator result, passed back to the caller untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ModerationVerdict(Value);

impl ModerationVerdict {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    Success(ModerationVerdict),
    InvalidInput(InputError),
    RemoteTimeout,
    RemoteFailure(String),
}

impl DispatchOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            DispatchOutcome::Success(_) => "success",
            DispatchOutcome::InvalidInput(_) => "invalid_input",
            DispatchOutcome::RemoteTimeout => "remote_timeout",
            DispatchOutcome::RemoteFailure(_) => "remote_failure",
        }
    }
}
