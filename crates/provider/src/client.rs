use serde_json::Value;

use crate::error::ProviderError;

/// WeatherStack current-conditions endpoint.
pub const WEATHERSTACK_URL: &str = "http://api.weatherstack.com/current";

/// Client for the WeatherStack current-conditions API.
pub struct ProviderClient {
    client: reqwest::Client,
    access_key: String,
    base_url: String,
}

impl std::fmt::Debug for ProviderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderClient")
            .field("client", &self.client)
            .field("access_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ProviderClient {
    /// Creates a client against the fixed WeatherStack endpoint.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(access_key: String, timeout: std::time::Duration) -> Result<Self, ProviderError> {
        Self::with_base_url(access_key, WEATHERSTACK_URL.to_owned(), timeout)
    }

    /// Creates a client against an explicit endpoint URL. Used by tests.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn with_base_url(
        access_key: String,
        base_url: String,
        timeout: std::time::Duration,
    ) -> Result<Self, ProviderError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::ClientInit(e.to_string()))?;
        Ok(Self { client, access_key, base_url })
    }

    /// Fetch current conditions for a location query and return the raw
    /// JSON payload.
    ///
    /// # Errors
    /// - [`ProviderError::Transport`] if the request cannot complete
    ///   (DNS, connection, timeout, body read).
    /// - [`ProviderError::HttpStatus`] if the upstream returns a
    ///   non-success status.
    /// - [`ProviderError::Rejected`] if the payload carries an in-band
    ///   error object.
    /// - [`ProviderError::JsonParse`] if the body is not valid JSON.
    pub async fn current(&self, location: &str) -> Result<Value, ProviderError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("access_key", self.access_key.as_str()), ("query", location)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "could not read error body".to_owned());
            return Err(ProviderError::HttpStatus { code: status.as_u16(), body });
        }

        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body).map_err(|e| ProviderError::JsonParse {
            context: format!("current conditions response (body: {})", truncate(&body, 200)),
            source: e,
        })?;

        reject_in_band_error(payload)
    }
}

/// WeatherStack reports request failures in-band: HTTP 200 with a
/// top-level `error` object instead of weather data.
fn reject_in_band_error(payload: Value) -> Result<Value, ProviderError> {
    let Some(error) = payload.get("error") else {
        return Ok(payload);
    };

    tracing::warn!(error = %error, "provider rejected request");
    let detail = error
        .get("info")
        .or_else(|| error.get("type"))
        .and_then(Value::as_str)
        .unwrap_or("weather provider reported an error")
        .to_owned();
    Err(ProviderError::Rejected { detail })
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
