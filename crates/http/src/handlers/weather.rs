use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use weatherlog_core::WeatherRecord;

use crate::api_error::ApiError;
use crate::api_types::{WeatherCreatedResponse, WeatherRequest};
use crate::AppState;

/// `POST /weather` — call the provider, store the combined record,
/// return the generated identifier.
///
/// Nothing is stored on a provider failure; the error is surfaced with
/// its mapped status code instead.
pub async fn create_weather(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WeatherRequest>,
) -> Result<(StatusCode, Json<WeatherCreatedResponse>), ApiError> {
    let provider_response = state.provider.current(&request.location).await?;

    let id = uuid::Uuid::new_v4().to_string();
    let record = WeatherRecord {
        id: id.clone(),
        date: request.date,
        location: request.location,
        notes: request.notes,
        provider_response,
    };
    state.store.put(record).await;
    tracing::debug!(%id, "stored weather record");

    Ok((StatusCode::CREATED, Json(WeatherCreatedResponse { id })))
}

/// `GET /weather/{id}` — the full stored record, verbatim.
pub async fn get_weather(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<WeatherRecord>, ApiError> {
    let record = state.store.get(&id).await?;
    Ok(Json(record))
}

/// `GET /weather/astro/{id}` — astronomy sub-view.
pub async fn get_astronomy(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    subview(&state, &id, WeatherRecord::astronomy).await
}

/// `GET /weather/location/{id}` — precise location sub-view.
pub async fn get_precise_location(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    subview(&state, &id, WeatherRecord::precise_location).await
}

/// `GET /weather/air-quality/{id}` — air quality sub-view.
pub async fn get_air_quality(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    subview(&state, &id, WeatherRecord::air_quality).await
}

/// Shared sub-view policy: look the record up, then run one fixed path
/// extraction. A missing record and a missing section both surface as
/// 404, distinguished only by the detail message.
async fn subview(
    state: &AppState,
    id: &str,
    extract: fn(&WeatherRecord) -> Option<&Value>,
) -> Result<Json<Value>, ApiError> {
    let record = state.store.get(id).await?;
    let section = extract(&record)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("no data available".to_owned()))?;
    Ok(Json(section))
}
