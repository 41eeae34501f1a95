//! Typed error enum for the provider crate.

use thiserror::Error;

/// Errors from WeatherStack API operations.
///
/// Each variant corresponds to one caller-facing outcome: `Rejected`
/// maps to a bad request, `Transport` to a bad gateway, `HttpStatus`
/// surfaces the upstream status as-is, and everything else is an
/// internal failure whose detail never reaches the caller.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("provider rejected request: {detail}")]
    Rejected { detail: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
