//! Configuration types and loading
//!
//! Each deployment of the platform serves a single community site, and most
//! behavior that varies per deployment hangs off the configured site URL.
//! Rendering code never reads this configuration directly; callers load it
//! once at the edge and pass the site URL down as an explicit argument.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Deployment-specific configuration
    pub deployment: DeploymentConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeploymentConfig {
    /// Base URL the deployment is served from.
    ///
    /// Canonical form: http(s) scheme, no trailing slash. Brand resolution
    /// matches this string literally, and resource links are built by
    /// appending site-relative paths to it.
    pub site_url: String,
}

impl DeploymentConfig {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            deployment: DeploymentConfig {
                site_url: "https://dev.onearmy.world".to_string(),
            },
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("SITE_URL") {
            config.deployment.site_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.deployment.site_url;

        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ConfigError::InvalidValue {
                key: "SITE_URL".to_string(),
                message: format!("expected an http(s) URL, got {}", url),
            });
        }

        if url.ends_with('/') {
            return Err(ConfigError::InvalidValue {
                key: "SITE_URL".to_string(),
                message: "trailing slash is not allowed".to_string(),
            });
        }

        Ok(())
    }

    /// Get the configured site base URL
    pub fn site_url(&self) -> &str {
        &self.deployment.site_url
    }
}
