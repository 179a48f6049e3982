//! Caller-facing HTTP surface.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::{
    dispatch::Dispatcher,
    domain::{DispatchOutcome, InputError, ModerationInput},
};

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub service_name: Arc<str>,
}

/// GET /health
///
/// Always 200; does not touch the coordinator.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({"status": "OK", "service": &*state.service_name}))
}

/// POST /moderate
async fn moderate(
    State(state): State<AppState>,
    payload: Result<Json<ModerationInput>, JsonRejection>,
) -> Response {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::warn!(target: "http", error = %rejection, "rejected moderation request body");
            return DispatchOutcome::InvalidInput(InputError::MissingContent).into_response();
        }
    };

    state.dispatcher.dispatch(&input).await.into_response()
}

pub fn moderation_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/moderate", post(moderate))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use reqwest::{Client, StatusCode};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    use super::*;
    use crate::{
        config::CoordinatorConfig,
        coordinator::{CoordinatorClient, CoordinatorError, TaskConfig, TaskRunner},
        domain::{ModerationVerdict, TaskDescriptor},
        http::GENERIC_ERROR_MESSAGE,
    };

    enum Canned {
        Verdict(Value),
        Fail(&'static str),
        Timeout,
    }

    #[async_trait]
    impl TaskRunner for Canned {
        async fn run_task(
            &self,
            _task: &TaskDescriptor,
            _config: &TaskConfig,
        ) -> Result<ModerationVerdict, CoordinatorError> {
            match self {
                Canned::Verdict(v) => Ok(ModerationVerdict::new(v.clone())),
                Canned::Fail(msg) => Err(CoordinatorError::Rejected(msg.to_string())),
                Canned::Timeout => Err(CoordinatorError::Timeout(Duration::from_secs(20))),
            }
        }
    }

    async fn start_server(runner: Arc<dyn TaskRunner>) -> String {
        let state = AppState {
            dispatcher: Arc::new(Dispatcher::new(runner, TaskConfig::new())),
            service_name: Arc::from("Moderation Service"),
        };
        let app = moderation_routes(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn post_moderate(base: &str, body: Value) -> (StatusCode, Value) {
        let resp = Client::new()
            .post(format!("{base}/moderate"))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = resp.status();
        (status, resp.json().await.unwrap())
    }

    #[tokio::test]
    async fn missing_fields_return_400() {
        let base = start_server(Arc::new(Canned::Fail("should not be called"))).await;
        let (status, body) = post_moderate(&base, json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("text or imageUrl is required"));
    }

    #[tokio::test]
    async fn empty_strings_return_400() {
        let base = start_server(Arc::new(Canned::Fail("unused"))).await;
        let (status, _) = post_moderate(&base, json!({"text": "", "imageUrl": ""})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_returns_400() {
        let base = start_server(Arc::new(Canned::Fail("unused"))).await;
        let resp = Client::new()
            .post(format!("{base}/moderate"))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = resp.json().await.unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn success_returns_verdict_verbatim() {
        let verdict = json!({"is_acceptable": true, "flags": [], "confidence_score": 0.99});
        let base = start_server(Arc::new(Canned::Verdict(verdict.clone()))).await;
        let (status, body) = post_moderate(&base, json!({"text": "This is some input text."})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, verdict);
    }

    #[tokio::test]
    async fn remote_failure_is_generic_500() {
        let base = start_server(Arc::new(Canned::Fail("AI Model Error"))).await;
        let (status, body) = post_moderate(&base, json!({"text": "This will fail"})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert_eq!(message, GENERIC_ERROR_MESSAGE);
        assert!(message.contains("internal error"));
        assert!(!message.contains("AI Model Error"));
    }

    #[tokio::test]
    async fn remote_timeout_is_same_generic_500() {
        let base = start_server(Arc::new(Canned::Timeout)).await;
        let (status, body) = post_moderate(&base, json!({"imageUrl": "http://example.com/a.jpg"})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": GENERIC_ERROR_MESSAGE}));
    }

    #[tokio::test]
    async fn health_is_ok_with_unreachable_coordinator() {
        let config = CoordinatorConfig {
            base_url: url::Url::parse("http://127.0.0.1:9").unwrap(),
            request_timeout: Duration::from_millis(100),
            task_config: TaskConfig::new(),
        };
        let client = CoordinatorClient::new(Client::new(), &config).unwrap();
        let base = start_server(Arc::new(client)).await;

        let resp = Client::new().get(format!("{base}/health")).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({"status": "OK", "service": "Moderation Service"}));
    }

    #[tokio::test]
    async fn unreachable_coordinator_yields_generic_500() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead = listener.local_addr().unwrap();
        drop(listener);

        let config = CoordinatorConfig {
            base_url: url::Url::parse(&format!("http://{dead}")).unwrap(),
            request_timeout: Duration::from_secs(2),
            task_config: TaskConfig::new(),
        };
        let client = CoordinatorClient::new(Client::new(), &config).unwrap();
        let base = start_server(Arc::new(client)).await;

        let (status, body) = post_moderate(&base, json!({"text": "hello"})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": GENERIC_ERROR_MESSAGE}));
    }
}
