// Integration tests against a real HTTP server
//
// Spawns the full application on a random port with actix-test and talks to
// it over the network with the awc client.

use actix_web::App;
use payment_calculator::config::{CalculatorConfig, ServerConfig};
use payment_calculator::configure_app;
use payment_calculator::middleware::{build_cors, RequestId};
use serde_json::{json, Value};

/// Spawn a real HTTP test server with the production middleware stack
fn spawn_test_server(calculator: CalculatorConfig) -> actix_test::TestServer {
    actix_test::start(move || {
        App::new()
            .wrap(build_cors(&ServerConfig::new("127.0.0.1".to_string(), 0)))
            .wrap(RequestId)
            .configure(configure_app(calculator.clone()))
    })
}

#[actix_web::test]
async fn test_calculation_round_trip_over_http() {
    let srv = spawn_test_server(CalculatorConfig::default());

    let mut response = srv
        .post("/api/payment-calculator/calculate")
        .send_json(&json!({
            "loanAmount": 5000,
            "interestRate": 10,
            "paymentsPerYear": 1
        }))
        .await
        .expect("request should succeed");

    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("valid JSON body");
    assert!((body["paymentAmount"].as_f64().unwrap() - 5500.0).abs() < 1e-6);
    assert!((body["totalInterest"].as_f64().unwrap() - 500.0).abs() < 1e-6);
    assert_eq!(body["paymentFrequency"], "Annual");
}

#[actix_web::test]
async fn test_validation_failure_over_http() {
    let srv = spawn_test_server(CalculatorConfig::default());

    let mut response = srv
        .post("/api/payment-calculator/calculate")
        .send_json(&json!({
            "loanAmount": 1000,
            "interestRate": 5,
            "paymentsPerYear": 0
        }))
        .await
        .expect("request should succeed");

    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.expect("valid JSON body");
    assert_eq!(body["error"]["violations"][0]["field"], "paymentsPerYear");
}

#[actix_web::test]
async fn test_rent_calculator_naming() {
    let srv = spawn_test_server(CalculatorConfig {
        base_path: "/api/rent-calculator".to_string(),
        display_name: "Rent Calculator API".to_string(),
    });

    let mut response = srv
        .get("/api/rent-calculator/")
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(response.status().as_u16(), 200);
    let body = response.body().await.expect("body");
    assert_eq!(&body[..], b"Rent Calculator API is running.");

    let mut response = srv
        .post("/api/rent-calculator/calculate")
        .send_json(&json!({
            "loanAmount": 1200,
            "interestRate": 0,
            "paymentsPerYear": 12
        }))
        .await
        .expect("request should succeed");
    let body: Value = response.json().await.expect("valid JSON body");
    assert_eq!(body["paymentAmount"], 100.0);

    let response = srv
        .get("/api/payment-calculator/ping")
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_ping_and_health_over_http() {
    let srv = spawn_test_server(CalculatorConfig::default());

    let mut response = srv
        .get("/api/payment-calculator/ping")
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(response.status().as_u16(), 200);
    let body = response.body().await.expect("body");
    assert_eq!(&body[..], b"OK");

    let mut response = srv.get("/health").send().await.expect("request should succeed");
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("valid JSON body");
    assert_eq!(body["status"], "healthy");
}
