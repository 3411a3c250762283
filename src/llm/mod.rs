//! LLM providers, provider selection, and prompt/response handling.

pub mod anthropic;
pub mod gemini;
mod http;
pub mod openai;
pub mod prompt;
pub mod provider;
pub mod registry;
pub mod sanitize;

pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;
pub use prompt::build_commit_prompt;
pub use provider::TextGenerator;
pub use registry::{DEFAULT_PROVIDER, ProviderRegistry};
pub use sanitize::sanitize_response;
