use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_RESOURCE, DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT_SECS,
    MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Where the lead records live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the record service, e.g. `http://localhost:3001/api`
    pub base_url: String,
    /// Resource path segment holding the leads
    pub resource: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Bearer token forwarded on every request
    pub auth_token: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_SERVICE_URL),
            resource: String::from(DEFAULT_RESOURCE),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            auth_token: None,
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::service(format!(
                "service.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.resource.trim().is_empty() || self.resource.contains('/') {
            return Err(ConfigError::service(format!(
                "service.resource must be a single non-empty path segment, got '{}'",
                self.resource
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::service(format!(
                "service.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
