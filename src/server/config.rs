use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Single allowed CORS origin; any origin is accepted when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        if bind_address.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidValue {
                name: "BIND_ADDRESS".to_string(),
                reason: format!("'{}' is not a socket address", bind_address),
            }
            .into());
        }

        let cors_allowed_origin = std::env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .filter(|origin| !origin.trim().is_empty());

        Ok(Self {
            database_url,
            bind_address,
            cors_allowed_origin,
        })
    }
}
