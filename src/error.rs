use std::fmt;

use shield_client::{ClientError, ConfigError};

/// Startup errors of the demo app
#[derive(Debug)]
pub enum AppError {
    /// Embedded configuration could not be parsed
    Config(ConfigError),
    /// HTTP client could not be created
    Client(ClientError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "{}", e),
            AppError::Client(e) => write!(f, "Client error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<ClientError> for AppError {
    fn from(e: ClientError) -> Self {
        AppError::Client(e)
    }
}
