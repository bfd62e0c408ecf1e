//! Error handling for the Agri Advisory Platform
//!
//! All failures are surfaced to the caller as a JSON envelope with an
//! `error` summary and a `details` string; nothing is retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// A present weather field has the wrong type (missing fields use
    /// defaults and never error)
    #[error("invalid weather field: {field}")]
    InvalidInput { field: String },

    /// The top-level `weather` object was absent from the request
    #[error("no weather data provided")]
    MissingWeatherPayload,

    /// The chat provider returned a non-success status, an unusable
    /// response, or the image payload could not be decoded
    #[error("chat provider error: {0}")]
    ChatUpstream(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response envelope
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::InvalidInput { field } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "invalid weather data".to_string(),
                    details: format!("field '{}' has the wrong type", field),
                },
            ),
            AppError::MissingWeatherPayload => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "no weather data provided".to_string(),
                    details: "request body must contain a 'weather' object".to_string(),
                },
            ),
            AppError::ChatUpstream(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse {
                    error: "chat provider error".to_string(),
                    details: msg.clone(),
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "configuration error".to_string(),
                    details: msg.clone(),
                },
            ),
            AppError::Internal(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "internal server error".to_string(),
                    details: err.to_string(),
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
