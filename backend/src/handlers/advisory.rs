//! HTTP handler for weather-based farming advisories

use axum::Json;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::services::AdvisoryEngine;
use shared::AdvisoryRecord;

/// Evaluate a weather snapshot into an advisory record.
///
/// Request body: `{"weather": {"current": {...}, "forecast": [...]}}`.
/// A missing `weather` object is a client error; missing fields inside the
/// snapshot fall back to defaults.
pub async fn get_farming_advisory(Json(payload): Json<Value>) -> AppResult<Json<AdvisoryRecord>> {
    let weather = match payload.get("weather") {
        Some(Value::Null) | None => return Err(AppError::MissingWeatherPayload),
        Some(weather) => weather,
    };

    let record = AdvisoryEngine::evaluate(weather)?;
    Ok(Json(record))
}
