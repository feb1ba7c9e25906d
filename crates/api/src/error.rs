use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use showcase_core::error::CoreError;
use showcase_db::QueryError;
use validator::{ValidationErrors, ValidationErrorsKind};

/// One rejected field (or path/query/body segment) in a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
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

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`QueryError`] for database
/// failures. Implements [`IntoResponse`] to produce consistent JSON bodies:
/// `{ "message", "code" }`, plus `"errors"` for validation failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Query(#[from] QueryError),

    /// Request shape pre-conditions failed.
    #[error("Validation error")]
    Validation(Vec<FieldError>),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(field_errors(&errors))
    }
}

/// Rust field names whose serde name differs, mapped to the key clients send.
const WIRE_NAMES: &[(&str, &str)] = &[("media_type", "type")];

fn wire_name(field: &str) -> &str {
    WIRE_NAMES
        .iter()
        .find(|(rust, _)| *rust == field)
        .map_or(field, |(_, wire)| wire)
}

/// Flatten validator output into a field-sorted list. Nested structs
/// contribute their own field names, reported under their JSON keys.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    collect(errors, &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

fn collect(errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(list) => {
                for err in list {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"));
                    out.push(FieldError::new(wire_name(field), message));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, out),
            ValidationErrorsKind::List(items) => {
                for inner in items.values() {
                    collect(inner, out);
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(errors) => {
                let body = json!({
                    "message": "Validation error",
                    "code": "VALIDATION_ERROR",
                    "errors": errors,
                });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }

            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } | CoreError::Missing(_) => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::BAD_REQUEST, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            },

            // --- Database errors ---
            AppError::Query(err) => {
                tracing::error!(error = %err, sqlstate = ?err.sqlstate(), "Database query failed");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "message": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
