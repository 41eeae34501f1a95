//! Startup configuration resolved from the process environment.
//!
//! Constructed once in the binary and threaded explicitly into the
//! provider client and router — nothing reads the environment after
//! startup.

use crate::env::env_parse_with_default;

/// Primary environment variable holding the WeatherStack access key.
pub const ACCESS_KEY_VAR: &str = "WEATHERLOG_ACCESS_KEY";
/// Fallback environment variable for the access key.
pub const ACCESS_KEY_FALLBACK_VAR: &str = "WEATHERSTACK_ACCESS_KEY";
/// Environment variable overriding the allowed CORS origin.
pub const ALLOWED_ORIGIN_VAR: &str = "WEATHERLOG_ALLOWED_ORIGIN";
/// Environment variable overriding the provider request timeout.
pub const PROVIDER_TIMEOUT_VAR: &str = "WEATHERLOG_PROVIDER_TIMEOUT_SECS";

/// Origin allowed by CORS when not overridden.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
/// Provider request timeout in seconds when not overridden.
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration for the server.
#[derive(Clone)]
pub struct Config {
    /// WeatherStack access key, sent with every provider request.
    pub access_key: String,
    /// Single origin allowed by the CORS layer.
    pub allowed_origin: String,
    /// Timeout applied to every provider request.
    pub provider_timeout_secs: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &"***")
            .field("allowed_origin", &self.allowed_origin)
            .field("provider_timeout_secs", &self.provider_timeout_secs)
            .finish()
    }
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// # Errors
    /// Returns an error if no access key variable is set.
    pub fn from_env() -> anyhow::Result<Self> {
        let access_key = std::env::var(ACCESS_KEY_VAR)
            .or_else(|_| std::env::var(ACCESS_KEY_FALLBACK_VAR))
            .map_err(|_| {
                anyhow::anyhow!(
                    "{ACCESS_KEY_VAR} or {ACCESS_KEY_FALLBACK_VAR} environment variable must be set"
                )
            })?;
        let allowed_origin = std::env::var(ALLOWED_ORIGIN_VAR)
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_owned());
        let provider_timeout_secs =
            env_parse_with_default(PROVIDER_TIMEOUT_VAR, DEFAULT_PROVIDER_TIMEOUT_SECS);

        Ok(Self { access_key, allowed_origin, provider_timeout_secs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_masks_access_key() {
        let config = Config {
            access_key: "secret-key".to_owned(),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_owned(),
            provider_timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("***"));
    }
}
