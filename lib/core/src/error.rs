use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single failed field constraint.
///
/// `field` is the dotted path into the submitted record
/// (e.g. `jobDetails.quantity`); `message` is the human-readable reason.
/// The API layer serializes these verbatim into the `errors` array of a
/// 400 response, and the CLI reconciles them onto form inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Unified service error type used across all modules.
///
/// Expected conditions (invalid input, duplicate key, missing record) are
/// values of this type, never panics. Each variant maps to one HTTP
/// status; the API layer owns the response body shape.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Requested record does not exist. HTTP 404.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness constraint was violated. HTTP 409.
    #[error("{0}")]
    Conflict(String),

    /// One or more field constraints failed. HTTP 400.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Storage backend failure. HTTP 500.
    #[error("{0}")]
    Storage(String),

    /// Unexpected internal error. HTTP 500.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_mapping() {
        assert_eq!(ServiceError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ServiceError::Conflict("x".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(ServiceError::Validation(vec![]).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ServiceError::Storage("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ServiceError::Internal("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_display_counts_fields() {
        let err = ServiceError::Validation(vec![
            FieldError::new("orderDetails.customer", "Customer is required"),
            FieldError::new("jobDetails.quantity", "Quantity must be at least 1"),
        ]);
        assert_eq!(err.to_string(), "validation failed on 2 field(s)");
    }

    #[test]
    fn field_error_json_shape() {
        let fe = FieldError::new("footer.date", "Date is required");
        let json = serde_json::to_value(&fe).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"field": "footer.date", "message": "Date is required"})
        );
    }
}
