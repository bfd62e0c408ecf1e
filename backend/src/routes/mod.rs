//! Route definitions for the Agri Advisory Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Weather-based farming advisory
        .route("/advisory", post(handlers::get_farming_advisory))
        // Welfare scheme catalogue
        .route("/schemes", get(handlers::list_schemes))
        // AI chat assistant proxy
        .route("/chat", post(handlers::chat_with_assistant))
}
