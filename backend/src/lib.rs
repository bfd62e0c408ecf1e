//! Agri Advisory Platform - Backend Server
//!
//! A small backend for Indian farmer assistance: weather-based farming
//! advisories, a catalogue of government welfare schemes, and an AI chat
//! assistant proxy.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use crate::config::Config;

use crate::external::chat::ChatClient;
use crate::services::schemes::SchemeCatalog;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub schemes: Arc<SchemeCatalog>,
    pub chat: Option<Arc<ChatClient>>,
}

impl AppState {
    /// Build application state from configuration.
    ///
    /// The chat client is only constructed when an API key is configured;
    /// the chat endpoint reports a configuration error otherwise.
    pub fn from_config(config: Config) -> Self {
        let chat = if config.chat.api_key.is_empty() {
            None
        } else {
            Some(Arc::new(ChatClient::new(
                config.chat.api_key.clone(),
                config.chat.model.clone(),
                config.chat.endpoint.clone(),
            )))
        };

        Self {
            config: Arc::new(config),
            schemes: Arc::new(SchemeCatalog::with_default_catalog()),
            chat,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Agri Advisory Platform API v1.0"
}
