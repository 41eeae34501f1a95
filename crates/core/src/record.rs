use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::json_path::extract_path;

/// Stored combination of a submitted lookup request and the provider's
/// raw response. Created once on a successful provider round-trip and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Generated identifier; equals the store key for this record.
    pub id: String,
    /// Caller-supplied date string, unvalidated.
    pub date: String,
    /// Caller-supplied location, used verbatim as the provider query.
    pub location: String,
    /// Caller-supplied notes, defaults to empty.
    pub notes: String,
    /// Raw JSON payload returned by the provider.
    pub provider_response: Value,
}

impl WeatherRecord {
    /// Astronomy section of the provider payload (`current.astro`).
    #[must_use]
    pub fn astronomy(&self) -> Option<&Value> {
        extract_path(&self.provider_response, &["current", "astro"])
    }

    /// Resolved location section of the provider payload (`location`).
    #[must_use]
    pub fn precise_location(&self) -> Option<&Value> {
        extract_path(&self.provider_response, &["location"])
    }

    /// Air quality section of the provider payload (`current.air_quality`).
    #[must_use]
    pub fn air_quality(&self) -> Option<&Value> {
        extract_path(&self.provider_response, &["current", "air_quality"])
    }
}
