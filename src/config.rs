//! Configuration types.

use crate::error::ConfigError;

/// Engine configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct OnboardingConfig {
    /// Base URL of the marketplace backend (profiles, aspects, payments).
    pub remote_base_url: String,
    /// Base URL of the identity service. Defaults to the remote base.
    pub identity_base_url: String,
    /// Port for the local status server.
    pub bind_port: u16,
}

impl OnboardingConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let remote_base_url = std::env::var("VENDOR_ONBOARD_REMOTE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("VENDOR_ONBOARD_REMOTE_URL".to_string()))?;
        let identity_base_url =
            std::env::var("VENDOR_ONBOARD_IDENTITY_URL").unwrap_or_else(|_| remote_base_url.clone());
        let bind_port = match std::env::var("VENDOR_ONBOARD_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "VENDOR_ONBOARD_PORT".to_string(),
                message: format!("not a port number: {raw}"),
            })?,
            Err(_) => 8080,
        };
        Ok(Self {
            remote_base_url,
            identity_base_url,
            bind_port,
        })
    }
}
