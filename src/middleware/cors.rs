use actix_cors::Cors;
use actix_web::http::{header, Method};

use crate::config::ServerConfig;

/// Build the CORS policy from server configuration.
///
/// `*` in the origin list opens the API to every origin, which is what the
/// browser frontend expects by default.
pub fn build_cors(config: &ServerConfig) -> Cors {
    let cors = if config.allows_any_origin() {
        Cors::default().allow_any_origin().send_wildcard()
    } else {
        config
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .allowed_header("x-request-id")
        .expose_headers(vec!["x-request-id"])
        .max_age(3600)
}
