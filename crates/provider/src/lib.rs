//! WeatherStack API client for weatherlog.
//!
//! One call, one classification: [`ProviderClient::current`] fetches
//! current conditions for a location and sorts every failure into a
//! [`ProviderError`] variant the HTTP layer can map to a status code.

mod client;
mod error;

pub use client::{ProviderClient, WEATHERSTACK_URL};
pub use error::ProviderError;
