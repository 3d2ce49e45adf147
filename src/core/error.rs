use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use std::fmt;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Category of a rejected input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required field absent or null
    MissingField,
    /// Field present but outside its permitted domain
    OutOfRange,
}

/// A single rejected field, reported back to the client
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldViolation {
    pub fn missing(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            kind: ViolationKind::MissingField,
            message: message.into(),
        }
    }

    pub fn out_of_range(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            kind: ViolationKind::OutOfRange,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// One or more request fields failed validation
    #[error("Validation error: {}", join_violations(.0))]
    Validation(Vec<FieldViolation>),

    /// Request body could not be parsed
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        let body = match self {
            AppError::Validation(violations) => serde_json::json!({
                "error": {
                    "message": error_message,
                    "code": status_code.as_u16(),
                    "violations": violations,
                }
            }),
            _ => serde_json::json!({
                "error": {
                    "message": error_message,
                    "code": status_code.as_u16(),
                }
            }),
        };

        HttpResponse::build(status_code).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn malformed_body(msg: impl Into<String>) -> Self {
        AppError::MalformedBody(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    /// Field violations carried by a validation error, empty otherwise
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            AppError::Validation(violations) => violations,
            _ => &[],
        }
    }
}
