use actix_web::{error::JsonPayloadError, HttpRequest};

use crate::core::AppError;

/// Map JSON extractor failures into the application error envelope.
///
/// Without this, actix answers a bad body with a plain-text 400 that the
/// frontend cannot parse.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
        JsonPayloadError::Deserialize(inner) => inner.to_string(),
        other => other.to_string(),
    };

    log_error(req, &message);

    AppError::malformed_body(message).into()
}

/// Log a rejected request with its route
pub fn log_error(req: &HttpRequest, message: &str) {
    tracing::warn!(
        method = %req.method(),
        path = %req.path(),
        "Rejected request body: {}",
        message
    );
}
