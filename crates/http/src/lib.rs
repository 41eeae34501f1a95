//! HTTP API server for weatherlog.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(missing_debug_implementations, reason = "Internal types")]

pub mod api_error;
mod api_types;
mod handlers;

use anyhow::Context;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use weatherlog_provider::ProviderClient;
use weatherlog_store::RecordStore;

pub use api_types::{WeatherCreatedResponse, WeatherRequest};

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// Process-lifetime record store.
    pub store: Arc<RecordStore>,
    /// WeatherStack client used by the creation handler.
    pub provider: Arc<ProviderClient>,
}

/// Builds the application router with CORS restricted to one origin.
///
/// All methods and headers are permitted from that origin (mirrored
/// back), credentials allowed.
///
/// # Errors
/// Returns an error if `allowed_origin` is not a valid header value.
pub fn create_router(state: Arc<AppState>, allowed_origin: &str) -> anyhow::Result<Router> {
    let origin = allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid allowed origin: {allowed_origin}"))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Ok(Router::new()
        .route("/health", get(health))
        .route("/weather", post(handlers::weather::create_weather))
        .route("/weather/{id}", get(handlers::weather::get_weather))
        .route("/weather/astro/{id}", get(handlers::weather::get_astronomy))
        .route("/weather/location/{id}", get(handlers::weather::get_precise_location))
        .route("/weather/air-quality/{id}", get(handlers::weather::get_air_quality))
        .layer(cors)
        .with_state(state))
}

async fn health() -> &'static str {
    "ok"
}
