use std::{env::VarError, time::Duration};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const API_KEY_ENV_VAR: &str = "ORS_API_KEY";
const BASE_URL_ENV_VAR: &str = "ORS_BASE_URL";
const TIMEOUT_ENV_VAR: &str = "ORS_TIMEOUT_SECS";

/// Connection settings for the directions provider.
#[derive(Clone)]
pub struct DirectionsConfig {
    pub api_key: String,
    pub base_url: String,
    /// Applies to every single provider request, not to a whole stitched route
    pub timeout: Duration,
}

impl DirectionsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: String::from(DEFAULT_BASE_URL),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env(API_KEY_ENV_VAR)?.ok_or(ConfigError::Missing(API_KEY_ENV_VAR))?;
        let mut config = DirectionsConfig::new(api_key);

        if let Some(base_url) = env(BASE_URL_ENV_VAR)? {
            config = config.with_base_url(base_url);
        }

        if let Some(timeout) = env(TIMEOUT_ENV_VAR)? {
            config = config.with_timeout(parse_timeout_secs(&timeout)?);
        }

        Ok(config)
    }
}

impl std::fmt::Debug for DirectionsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Whole seconds, zero is rejected since it would fail every request.
fn parse_timeout_secs(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(seconds) if seconds > 0 => Ok(Duration::from_secs(seconds)),
        _ => Err(ConfigError::Invalid {
            name: TIMEOUT_ENV_VAR,
            value: value.to_string(),
        }),
    }
}

fn env(name: &'static str) -> Result<Option<String>, ConfigError> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::Invalid {
            name,
            value: String::from("<not unicode>"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DirectionsConfig::new("secret");

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = DirectionsConfig::new("secret").with_base_url("http://localhost:8082");
        let debug = format!("{:?}", config);

        assert!(!debug.contains("secret"));
        assert!(debug.contains("http://localhost:8082"));
    }

    #[test]
    fn test_parse_timeout_secs() {
        assert_eq!(parse_timeout_secs("45").unwrap(), Duration::from_secs(45));
        assert_eq!(parse_timeout_secs(" 5 ").unwrap(), Duration::from_secs(5));

        for value in ["0", "-3", "1.5", "soon"] {
            assert!(matches!(
                parse_timeout_secs(value),
                Err(ConfigError::Invalid {
                    name: TIMEOUT_ENV_VAR,
                    ..
                })
            ));
        }
    }
}
