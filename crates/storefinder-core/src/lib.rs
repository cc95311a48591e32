pub mod app_config;
pub mod config;
pub mod fetch_error;
pub mod location;
pub mod source;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use fetch_error::{FetchError, TransportFailure, UNEXPECTED_ERROR_MESSAGE};
pub use location::{Location, PageResult};
pub use source::LocationDataSource;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
