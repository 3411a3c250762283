//! Error types for commit-genie modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading the per-user configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Refusing to use unsafe configuration path '{}': {reason}", path.display())]
    UnsafePath { path: PathBuf, reason: String },

    #[error(
        "Config file not found at {}. Create it with your provider API keys, e.g.\n  \
             mkdir -p {} && echo 'GEMINI_API_KEY=...' > {}",
        path.display(),
        path.parent().map(|p| p.display().to_string()).unwrap_or_default(),
        path.display()
    )]
    NotFound { path: PathBuf },

    #[error("Failed to load config file {}: {source}", path.display())]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: dotenv::Error,
    },
}

/// Errors from invoking git.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("Not in a git repository: {stderr}")]
    NotARepository { stderr: String },

    #[error("git diff --cached exited with {}: {stderr}",
             code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    DiffFailed { code: Option<i32>, stderr: String },
}

/// Errors from creating the commit.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Commit message is empty after sanitization")]
    EmptyAfterSanitization,

    #[error("git commit failed:\n{output}")]
    Failed { output: String },

    #[error(transparent)]
    Git(#[from] GitError),
}

/// Errors from LLM providers. Every variant names the provider it came from.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{provider}: API key not set. Add {env_var}=<your-key> to your config file or environment")]
    MissingApiKey {
        provider: &'static str,
        env_var: &'static str,
    },

    #[error("{provider}: request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider}: API returned HTTP {status}: {body}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("{provider}: could not parse response: {detail}")]
    InvalidResponse {
        provider: &'static str,
        detail: String,
    },

    #[error("{provider}: returned an empty response")]
    EmptyResponse { provider: &'static str },

    #[error("No provider registered under the default name '{0}'")]
    NoDefaultProvider(String),
}

impl ProviderError {
    /// Name of the provider the error is attributed to, if any.
    pub fn provider(&self) -> Option<&str> {
        match self {
            ProviderError::MissingApiKey { provider, .. }
            | ProviderError::Transport { provider, .. }
            | ProviderError::Api { provider, .. }
            | ProviderError::InvalidResponse { provider, .. }
            | ProviderError::EmptyResponse { provider } => Some(*provider),
            ProviderError::NoDefaultProvider(_) => None,
        }
    }
}

/// Errors from reading the interactive y/n answer.
#[derive(Error, Debug)]
pub enum ConfirmError {
    #[error("Error reading your response: {0}")]
    Read(#[source] std::io::Error),

    #[error("Error writing the prompt: {0}")]
    Write(#[source] std::io::Error),

    #[error("Input closed before a y/n answer was given")]
    InputClosed,
}

/// Errors from the end-to-end commit message pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("The model returned no usable commit message")]
    EmptyMessage,

    #[error(transparent)]
    Confirm(#[from] ConfirmError),

    #[error(transparent)]
    Commit(#[from] CommitError),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
