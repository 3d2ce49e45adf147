use crate::core::{AppError, Result};
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub calculator: CalculatorConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Output format of the tracing fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::Configuration(format!(
                "Invalid LOG_FORMAT: {}",
                other
            ))),
        }
    }
}

/// Naming of the calculator endpoints.
///
/// The same calculation is exposed under different product names (loan
/// calculator, rent calculator); only the route prefix and the banner text
/// differ between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    pub base_path: String,
    pub display_name: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            base_path: "/api/payment-calculator".to_string(),
            display_name: "Payment Calculator API".to_string(),
        }
    }
}

impl CalculatorConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_path: env::var("CALCULATOR_BASE_PATH").unwrap_or(defaults.base_path),
            display_name: env::var("CALCULATOR_DISPLAY_NAME").unwrap_or(defaults.display_name),
        }
    }

    /// Banner returned from the root endpoint
    pub fn banner(&self) -> String {
        format!("{} is running.", self.display_name)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "text".to_string())
                    .parse()?,
            },
            server: ServerConfig::from_env()?,
            calculator: CalculatorConfig::from_env(),
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Worker count must be greater than 0".to_string(),
            ));
        }

        if self.server.allowed_origins.is_empty() {
            return Err(AppError::Configuration(
                "At least one CORS origin must be configured".to_string(),
            ));
        }

        if !self.calculator.base_path.starts_with('/') {
            return Err(AppError::Configuration(format!(
                "Calculator base path must start with '/': {}",
                self.calculator.base_path
            )));
        }

        Ok(())
    }
}
