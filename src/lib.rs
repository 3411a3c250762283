//! commit-genie - propose a Conventional Commits message for staged changes.
//!
//! # Overview
//!
//! commit-genie reads `git diff --cached`, asks a hosted LLM (OpenAI,
//! Anthropic or Gemini) for a commit message in the chosen language, cleans
//! up the reply, and commits with it once the user confirms.

pub mod config;
pub mod confirm;
pub mod error;
pub mod git;
pub mod language;
pub mod listing;
pub mod llm;
pub mod pipeline;
pub mod selection;

// Re-export commonly used types
pub use error::{CommitError, ConfigError, ConfirmError, GitError, PipelineError, ProviderError};
pub use language::{Language, resolve_language};
pub use llm::{ProviderRegistry, TextGenerator};
pub use pipeline::{Outcome, PipelineRequest};
pub use selection::{Resolved, SelectionWarning};
