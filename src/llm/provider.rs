//! The contract every LLM provider adapter implements.

use async_trait::async_trait;

use crate::error::ProviderError;

/// A hosted text-generation service: prompt in, text out.
///
/// This abstraction allows mocking the remote APIs in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Registry name, e.g. "openai".
    fn name(&self) -> &'static str;

    /// Fixed model identifier requests are bound to.
    fn model(&self) -> &'static str;

    /// Send `prompt` as a single request and return the raw generated text.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
