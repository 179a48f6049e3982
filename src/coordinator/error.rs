use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Failures reaching or reported by the coordinator. Messages here are for
/// logs only and never reach the caller.
#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("coordinator request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("failed to communicate with coordinator: {0}")]
    Transport(&'static str),
    #[error("coordinator returned a malformed response: {0}")]
    MalformedResponse(String),
    #[error("coordinator task failed with status {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("coordinator task failed: {0}")]
    Rejected(String),
}

impl CoordinatorError {
    /// Reduces a transport error to a fixed description. The raw error is
    /// logged by the caller before it is discarded.
    pub fn transport(err: &reqwest::Error) -> Self {
        let kind = if err.is_connect() {
            "connection failed"
        } else if err.is_timeout() {
            "transport timeout"
        } else if err.is_body() || err.is_decode() {
            "response body unreadable"
        } else if err.is_builder() || err.is_request() {
            "request could not be sent"
        } else {
            "request failed"
        };
        CoordinatorError::Transport(kind)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, CoordinatorError::Timeout(_))
    }
}
