//! Google Gemini generateContent adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{GEMINI_API_KEY_VAR, env_value};
use crate::error::ProviderError;

use super::http::{non_empty_text, require_key, send_json};
use super::provider::TextGenerator;

pub const GEMINI_PROVIDER: &str = "gemini";
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read the key from `GEMINI_API_KEY`.
    pub fn from_env(client: Client) -> Self {
        Self::new(client, env_value(GEMINI_API_KEY_VAR))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    // The key goes in a header rather than `?key=` so it never shows up in
    // error messages that echo the URL.
    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, GEMINI_MODEL
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    fn name(&self) -> &'static str {
        GEMINI_PROVIDER
    }

    fn model(&self) -> &'static str {
        GEMINI_MODEL
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = require_key(GEMINI_PROVIDER, GEMINI_API_KEY_VAR, self.api_key.as_deref())?;

        let body = GenerateRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let request = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key);
        let response: GenerateResponse = send_json(GEMINI_PROVIDER, request, &body).await?;

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::InvalidResponse {
                provider: GEMINI_PROVIDER,
                detail: "no candidates in response".to_string(),
            })?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        non_empty_text(GEMINI_PROVIDER, text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_contains_model_not_key() {
        let provider = GeminiProvider::new(Client::new(), Some("secret-key".to_string()));
        let url = provider.url();
        assert!(url.ends_with("/v1beta/models/gemini-2.5-flash:generateContent"));
        assert!(!url.contains("secret-key"));
    }

    #[test]
    fn test_candidate_without_content_parses() {
        let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert!(response.candidates[0].content.is_none());
    }
}
