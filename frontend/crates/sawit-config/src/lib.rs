//! Configuration for the MySawit admin client.
//!
//! Holds the base URL of every backing microservice, logging and session
//! storage settings, and the endpoint builders composed over those base URLs.

mod config;
mod endpoints;
mod error;
mod log_level;
mod logging_config;
mod services_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use endpoints::{
    ApiEndpoints, AuthEndpoints, HarvestEndpoints, PayrollEndpoints, PlantationEndpoints,
    ShipmentEndpoints,
};
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use services_config::ServicesConfig;
pub use session_config::SessionConfig;

pub const CONFIG_DIR_ENV: &str = "SAWIT_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".sawit";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_IDENTITY_SERVICE_URL: &str = "http://localhost:8081";
pub const DEFAULT_PLANTATION_SERVICE_URL: &str = "http://localhost:8082";
pub const DEFAULT_HARVEST_SERVICE_URL: &str = "http://localhost:8083";
pub const DEFAULT_SHIPMENT_SERVICE_URL: &str = "http://localhost:8084";
pub const DEFAULT_PAYROLL_SERVICE_URL: &str = "http://localhost:8085";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_SESSION_ENABLED: bool = true;
const DEFAULT_SESSION_FILENAME: &str = "session.json";
