use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::DispatchOutcome;

pub const GENERIC_ERROR_MESSAGE: &str =
    "An internal error occurred while processing the moderation request.";

impl IntoResponse for DispatchOutcome {
    fn into_response(self) -> Response {
        match self {
            DispatchOutcome::Success(verdict) => {
                (StatusCode::OK, Json(verdict.into_value())).into_response()
            }
            DispatchOutcome::InvalidInput(err) => {
                (StatusCode::BAD_REQUEST, Json(json!({"error": err.to_string()}))).into_response()
            }
            // Remote detail was logged by the dispatcher; the caller only
            // ever sees the generic message.
            DispatchOutcome::RemoteTimeout | DispatchOutcome::RemoteFailure(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": GENERIC_ERROR_MESSAGE})),
            )
                .into_response(),
        }
    }
}
