//! Request and response types for the weather API.

use serde::{Deserialize, Serialize};

/// Body of `POST /weather`.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherRequest {
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub notes: String,
}

/// Identifier returned on successful creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct WeatherCreatedResponse {
    pub id: String,
}
