mod job;
mod report;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use flexerp_core::{FieldError, ServiceError};

use crate::service::JobsheetService;

/// Shared application state.
pub type AppState = Arc<JobsheetService>;

/// Build the jobsheet API router, nested under `/api`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new().merge(report::routes()).merge(job::routes())
}

/// Success envelope: `{"success": true, "message"?, "data"}`.
#[derive(Debug, Serialize)]
pub struct ApiData<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T: Serialize> ApiData<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn created(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            data,
        }
    }
}

/// Failure envelope: `{"success": false, "message", "errors"?}`.
///
/// `errors` carries per-field violations for 400 responses so the form
/// can attach each message to its input.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub errors: Option<Vec<FieldError>>,
}

impl ApiError {
    pub fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
            errors: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({
            "success": false,
            "message": self.message,
        });
        if let Some(errors) = self.errors {
            body["errors"] = serde_json::json!(errors);
        }
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let status = err.status_code();
        match err {
            ServiceError::Validation(errors) => ApiError {
                status,
                message: "Validation Error".into(),
                errors: Some(errors),
            },
            ServiceError::NotFound(msg) | ServiceError::Conflict(msg) => ApiError {
                status,
                message: msg,
                errors: None,
            },
            ServiceError::Storage(msg) | ServiceError::Internal(msg) => {
                // Internal detail goes to the log, never to the caller.
                tracing::error!("request failed: {}", msg);
                ApiError {
                    status,
                    message: "Server Error".into(),
                    errors: None,
                }
            }
        }
    }
}

/// Reject bodies that are missing or empty before validation runs.
pub(crate) fn require_body(body: &serde_json::Value) -> Result<(), ApiError> {
    if body.as_object().is_none_or(|o| o.is_empty()) {
        return Err(ApiError::bad_request("Request body is required"));
    }
    Ok(())
}
