// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
///
/// Every variant renders as the fixed envelope
/// `{"success": false, "error": <code>, "message": <text>}`.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request (malformed or missing top-level input)
    BadRequest,

    // 404 Not Found (no matching resource, or an empty result page)
    NotFound,

    // 405 Method Not Allowed
    MethodNotAllowed,

    // 422 Unprocessable (well-formed create payload, invalid contents)
    Unprocessable,

    // 500 Internal Server Error; the detail is logged, never exposed
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest => (StatusCode::BAD_REQUEST, "bad request"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "resource not found"),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
            AppError::Unprocessable => (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable"),
            AppError::InternalServerError(detail) => {
                tracing::error!("Internal Server Error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::InternalServerError`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}
