//! Provider registry and `--llm-provider` resolution.

use std::collections::BTreeMap;

use reqwest::Client;
use tracing::debug;

use crate::error::ProviderError;
use crate::selection::{Resolved, SelectionWarning, ValueSource, non_empty};

use super::anthropic::AnthropicProvider;
use super::gemini::{GEMINI_PROVIDER, GeminiProvider};
use super::openai::OpenAiProvider;
use super::provider::TextGenerator;

/// Provider used when nothing (valid) is selected.
pub const DEFAULT_PROVIDER: &str = GEMINI_PROVIDER;

/// Name to adapter mapping, built once at startup and passed by reference.
pub struct ProviderRegistry {
    providers: BTreeMap<String, Box<dyn TextGenerator>>,
    default_name: String,
}

impl ProviderRegistry {
    /// Empty registry falling back to `default_name`.
    pub fn new(default_name: impl Into<String>) -> Self {
        Self {
            providers: BTreeMap::new(),
            default_name: default_name.into(),
        }
    }

    /// The built-in OpenAI, Anthropic and Gemini adapters, keys read from the
    /// environment.
    pub fn with_default_providers(client: Client) -> Self {
        let mut registry = Self::new(DEFAULT_PROVIDER);
        registry.register(OpenAiProvider::from_env(client.clone()));
        registry.register(AnthropicProvider::from_env(client.clone()));
        registry.register(GeminiProvider::from_env(client));
        registry
    }

    /// Add a provider under its own name. A later registration with the same
    /// name replaces the earlier one.
    pub fn register<P: TextGenerator + 'static>(&mut self, provider: P) {
        self.register_boxed(Box::new(provider));
    }

    pub fn register_boxed(&mut self, provider: Box<dyn TextGenerator>) {
        let name = provider.name().to_string();
        if self.providers.insert(name.clone(), provider).is_some() {
            debug!("Replaced provider '{}'", name);
        }
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    pub fn get(&self, name: &str) -> Option<&dyn TextGenerator> {
        self.providers.get(name).map(|p| p.as_ref())
    }

    /// The adapter for `name`, or the default adapter when `name` is empty or
    /// unknown.
    pub fn resolve(&self, name: &str) -> Result<&dyn TextGenerator, ProviderError> {
        if let Some(provider) = self.get(name.trim()) {
            return Ok(provider);
        }
        self.get(&self.default_name)
            .ok_or_else(|| ProviderError::NoDefaultProvider(self.default_name.clone()))
    }

    /// Pick a provider name: `--llm-provider` flag, then
    /// `AI_COMMIT_PREFERRED_LLM_PROVIDER`, then the default.
    ///
    /// Unknown names warn and fall through, so the result is always either a
    /// registered name or the default name.
    pub fn resolve_provider(&self, flag: Option<&str>, env: Option<&str>) -> Resolved<String> {
        let mut warnings = Vec::new();

        for (value, source) in [(flag, ValueSource::Flag), (env, ValueSource::Environment)] {
            let Some(value) = non_empty(value) else {
                continue;
            };
            if self.contains(value) {
                return Resolved::new(value.to_string(), warnings);
            }
            warnings.push(SelectionWarning {
                kind: "LLM provider",
                source,
                value: value.to_string(),
                fallback: match source {
                    ValueSource::Flag => "Using configured provider".to_string(),
                    ValueSource::Environment => format!("Using {}", self.default_name),
                },
            });
        }

        Resolved::new(self.default_name.clone(), warnings)
    }
}
