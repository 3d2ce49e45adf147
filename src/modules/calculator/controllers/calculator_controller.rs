//! Calculator controller for HTTP endpoints
//!
//! Endpoints (relative to the configured base path):
//! - POST /calculate - Compute a payment breakdown
//! - GET /ping - Liveness check used by the frontend
//! - GET / - Service banner

use actix_web::{web, HttpResponse};
use tracing::warn;

use crate::config::CalculatorConfig;
use crate::core::Result;
use crate::middleware::json_error_handler;
use crate::modules::calculator::{
    models::{CalculationRequest, CalculationResponse},
    services::PaymentCalculator,
};

/// POST {base}/calculate
///
/// # Request Body
/// ```json
/// { "loanAmount": 12000, "interestRate": 6, "paymentsPerYear": 12 }
/// ```
///
/// # Returns
/// - 200: Payment breakdown
/// - 400: Missing or out-of-range fields, or an unparseable body
pub async fn calculate(request: web::Json<CalculationRequest>) -> Result<HttpResponse> {
    let input = request.validate().inspect_err(|err| {
        warn!(violations = err.violations().len(), "Rejected calculation request: {}", err);
    })?;

    let result = PaymentCalculator::new()
        .compute(&input)
        .ensure_finite()
        .inspect_err(|err| warn!("Calculation overflowed: {}", err))?;

    Ok(HttpResponse::Ok().json(CalculationResponse::from(result)))
}

/// GET {base}/ping
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("OK")
}

/// GET {base}/
pub async fn home(settings: web::Data<CalculatorConfig>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(settings.banner())
}

/// Configure calculator routes under `settings.base_path`
pub fn configure_calculator_routes(
    settings: CalculatorConfig,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let base_path = settings.base_path.trim_end_matches('/').to_string();

        cfg.service(
            web::scope(&base_path)
                .app_data(web::Data::new(settings))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .route("/calculate", web::post().to(calculate))
                .route("/ping", web::get().to(ping))
                .route("/", web::get().to(home))
                .route("", web::get().to(home)),
        );
    }
}
