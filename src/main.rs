use actix_web::{App, HttpServer};
use anyhow::Context;
use payment_calculator::config::{Config, LogFormat};
use payment_calculator::configure_app;
use payment_calculator::middleware::{build_cors, RequestId};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting Payment Calculator service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());
    tracing::info!("Calculator routes mounted at: {}", config.calculator.base_path);

    let bind_address = config.server.bind_address();
    let server_config = config.server.clone();
    let calculator_config = config.calculator.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&server_config))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(configure_app(calculator_config.clone()))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("HTTP server terminated with an error")
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "payment_calculator={},actix_web=info",
            config.app.log_level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
