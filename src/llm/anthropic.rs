//! Anthropic messages API adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{ANTHROPIC_API_KEY_VAR, env_value};
use crate::error::ProviderError;

use super::http::{non_empty_text, require_key, send_json};
use super::provider::TextGenerator;

pub const ANTHROPIC_PROVIDER: &str = "anthropic";
pub const ANTHROPIC_MODEL: &str = "claude-3-5-haiku-latest";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

pub struct AnthropicProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl AnthropicProvider {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read the key from `ANTHROPIC_API_KEY`.
    pub fn from_env(client: Client) -> Self {
        Self::new(client, env_value(ANTHROPIC_API_KEY_VAR))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

#[async_trait]
impl TextGenerator for AnthropicProvider {
    fn name(&self) -> &'static str {
        ANTHROPIC_PROVIDER
    }

    fn model(&self) -> &'static str {
        ANTHROPIC_MODEL
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = require_key(
            ANTHROPIC_PROVIDER,
            ANTHROPIC_API_KEY_VAR,
            self.api_key.as_deref(),
        )?;

        let body = MessagesRequest {
            model: ANTHROPIC_MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let request = self
            .client
            .post(self.url())
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION);
        let response: MessagesResponse = send_json(ANTHROPIC_PROVIDER, request, &body).await?;

        non_empty_text(ANTHROPIC_PROVIDER, text_of(response))
    }
}

/// Concatenate the text blocks of a reply, skipping every other block type.
fn text_of(response: MessagesResponse) -> String {
    response
        .content
        .into_iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}
