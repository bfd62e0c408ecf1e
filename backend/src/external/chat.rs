//! Chat assistant client for the generative AI provider
//!
//! Proxies farmer questions (and optional crop photos) to a Gemini-style
//! generateContent API with a fixed agronomist persona. Upstream failures
//! are surfaced to the caller with provider details and never retried.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Persona instruction sent with every conversation turn
const PERSONA_PROMPT: &str = "You are an experienced Indian agronomist helping \
smallholder farmers. Give practical, low-cost advice suited to Indian growing \
conditions, crops, and seasons. Keep answers short and simple. If the farmer \
shares a photo, identify visible crop, pest, or disease issues before advising.";

/// Client for the chat completion provider
#[derive(Clone)]
pub struct ChatClient {
    http_client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

/// Request payload for the generateContent API
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

/// Response payload from the generateContent API
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl ChatClient {
    /// Create a new chat client
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            api_key,
            model,
            base_url,
        }
    }

    /// Send a farmer's message (and optional photo) to the provider and
    /// return the assistant's reply text.
    pub async fn send_message(
        &self,
        message: &str,
        image: Option<&str>,
        language: Option<&str>,
    ) -> AppResult<String> {
        let mut parts = vec![Part::Text {
            text: build_prompt(message, language),
        }];

        if let Some(data_uri) = image {
            let (mime_type, data) = parse_image_data_uri(data_uri)?;
            parts.push(Part::InlineData {
                inline_data: InlineData { mime_type, data },
            });
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .http_client
            .post(&url)
            .json(&GenerateContentRequest {
                contents: vec![Content { parts }],
            })
            .send()
            .await
            .map_err(|e| AppError::ChatUpstream(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ChatUpstream(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::ChatUpstream(format!("failed to parse response: {}", e)))?;

        extract_reply(result)
    }
}

/// Combine the persona, language preference, and the farmer's question
fn build_prompt(message: &str, language: Option<&str>) -> String {
    match language {
        Some(lang) if !lang.trim().is_empty() => format!(
            "{}\n\nRespond in {}.\n\nFarmer's question: {}",
            PERSONA_PROMPT, lang, message
        ),
        _ => format!("{}\n\nFarmer's question: {}", PERSONA_PROMPT, message),
    }
}

/// Split a base64 data URI ("data:image/png;base64,....") into its MIME type
/// and payload, verifying the payload decodes.
fn parse_image_data_uri(data_uri: &str) -> AppResult<(String, String)> {
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    let malformed = || AppError::ChatUpstream("malformed image data URI".to_string());

    let rest = data_uri.strip_prefix("data:").ok_or_else(malformed)?;
    let (header, payload) = rest.split_once(',').ok_or_else(malformed)?;
    let mime_type = header.strip_suffix(";base64").ok_or_else(malformed)?;

    if mime_type.is_empty() || !mime_type.starts_with("image/") {
        return Err(malformed());
    }

    STANDARD
        .decode(payload)
        .map_err(|e| AppError::ChatUpstream(format!("invalid image payload: {}", e)))?;

    Ok((mime_type.to_string(), payload.to_string()))
}

/// Pull the first text part out of the provider response
fn extract_reply(response: GenerateContentResponse) -> AppResult<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| {
            candidate
                .content
                .parts
                .into_iter()
                .find_map(|part| part.text)
        })
        .filter(|text| !text.is_empty())
        .ok_or_else(|| AppError::ChatUpstream("provider returned no reply text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_png_data_uri() {
        // "hi" base64-encoded
        let (mime, data) = parse_image_data_uri("data:image/png;base64,aGk=").unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(data, "aGk=");
    }

    #[test]
    fn rejects_missing_data_prefix() {
        assert!(parse_image_data_uri("image/png;base64,aGk=").is_err());
    }

    #[test]
    fn rejects_non_image_mime_type() {
        assert!(parse_image_data_uri("data:text/plain;base64,aGk=").is_err());
    }

    #[test]
    fn rejects_invalid_base64_payload() {
        assert!(parse_image_data_uri("data:image/jpeg;base64,not@@base64").is_err());
    }

    #[test]
    fn prompt_includes_language_when_given() {
        let prompt = build_prompt("When to sow wheat?", Some("Hindi"));
        assert!(prompt.contains("Respond in Hindi."));
        assert!(prompt.contains("When to sow wheat?"));

        let prompt = build_prompt("When to sow wheat?", None);
        assert!(!prompt.contains("Respond in"));
    }

    #[test]
    fn extracts_first_text_part() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: CandidateContent {
                    parts: vec![
                        CandidatePart { text: None },
                        CandidatePart {
                            text: Some("Sow in November.".to_string()),
                        },
                    ],
                },
            }],
        };
        assert_eq!(extract_reply(response).unwrap(), "Sow in November.");
    }

    #[test]
    fn empty_candidates_is_an_upstream_error() {
        let response = GenerateContentResponse { candidates: vec![] };
        assert!(extract_reply(response).is_err());
    }
}
