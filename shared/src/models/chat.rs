//! Chat assistant request/response models

use serde::{Deserialize, Serialize};

/// A farmer's message to the AI assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The question or message text
    pub message: String,
    /// Optional photo of a crop or pest, as a base64 data URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Preferred reply language, e.g. "Hindi" or "Telugu"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// The assistant's reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
