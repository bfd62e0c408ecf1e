//! HTTP handler for the welfare scheme catalogue

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::AppState;
use shared::Scheme;

/// Query parameters for scheme filtering
#[derive(Debug, Deserialize)]
pub struct SchemeQuery {
    pub state: Option<String>,
    pub crop: Option<String>,
}

/// List welfare schemes, optionally filtered by state and crop
pub async fn list_schemes(
    State(state): State<AppState>,
    Query(query): Query<SchemeQuery>,
) -> AppResult<Json<Vec<Scheme>>> {
    let schemes = state
        .schemes
        .filter(query.state.as_deref(), query.crop.as_deref());
    Ok(Json(schemes))
}
