use std::sync::Arc;

use crate::{
    coordinator::{CoordinatorError, TaskConfig, TaskRunner},
    domain::{DispatchOutcome, ModerationInput, TaskDescriptor},
};

/// Turns one moderation request into exactly one coordinator call and folds
/// the result into a [`DispatchOutcome`]. Holds no per-request state.
pub struct Dispatcher {
    runner: Arc<dyn TaskRunner>,
    task_config: TaskConfig,
}

impl Dispatcher {
    pub fn new(runner: Arc<dyn TaskRunner>, task_config: TaskConfig) -> Self {
        Self {
            runner,
            task_config,
        }
    }

    pub async fn dispatch(&self, input: &ModerationInput) -> DispatchOutcome {
        let task = match TaskDescriptor::build(input) {
            Ok(task) => task,
            Err(err) => {
                tracing::warn!(target: "dispatcher", "moderation request without text or imageUrl");
                return DispatchOutcome::InvalidInput(err);
            }
        };

        tracing::info!(
            target: "dispatcher",
            task_type = task.task_type().as_str(),
            has_text = input.text().is_some(),
            has_image = input.image_reference().is_some(),
            "requesting moderation from coordinator"
        );

        let outcome = match self.runner.run_task(&task, &self.task_config).await {
            Ok(verdict) => DispatchOutcome::Success(verdict),
            Err(CoordinatorError::Timeout(after)) => {
                tracing::error!(
                    target: "dispatcher",
                    task_type = task.task_type().as_str(),
                    timeout_ms = after.as_millis() as u64,
                    "coordinator did not answer before the deadline"
                );
                DispatchOutcome::RemoteTimeout
            }
            Err(err) => {
                tracing::error!(
                    target: "dispatcher",
                    task_type = task.task_type().as_str(),
                    error = %err,
                    "coordinator call failed"
                );
                DispatchOutcome::RemoteFailure(err.to_string())
            }
        };

        tracing::info!(target: "dispatcher", outcome = outcome.label(), "moderation request settled");
        outcome
    }
}
