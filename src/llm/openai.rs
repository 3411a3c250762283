//! OpenAI chat completions adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{OPENAI_API_KEY_VAR, env_value};
use crate::error::ProviderError;

use super::http::{non_empty_text, require_key, send_json};
use super::provider::TextGenerator;

pub const OPENAI_PROVIDER: &str = "openai";
pub const OPENAI_MODEL: &str = "gpt-4.1-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com";

pub struct OpenAiProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read the key from `OPENAI_API_KEY`.
    pub fn from_env(client: Client) -> Self {
        Self::new(client, env_value(OPENAI_API_KEY_VAR))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl TextGenerator for OpenAiProvider {
    fn name(&self) -> &'static str {
        OPENAI_PROVIDER
    }

    fn model(&self) -> &'static str {
        OPENAI_MODEL
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = require_key(OPENAI_PROVIDER, OPENAI_API_KEY_VAR, self.api_key.as_deref())?;

        let body = ChatRequest {
            model: OPENAI_MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let request = self.client.post(self.url()).bearer_auth(api_key);
        let response: ChatResponse = send_json(OPENAI_PROVIDER, request, &body).await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ProviderError::InvalidResponse {
                provider: OPENAI_PROVIDER,
                detail: "no choices returned".to_string(),
            })?;

        non_empty_text(OPENAI_PROVIDER, content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}
