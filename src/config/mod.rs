//! Per-user configuration and environment variable names.

pub mod loader;

pub use loader::{ConfigSource, config_path, load, load_from_home, validate_home};

/// Directory name under `~/.config` holding the `.env` file.
pub const APP_DIR_NAME: &str = "git-ai-commit-genie";

/// File name of the dotenv-format config file.
pub const CONFIG_FILE_NAME: &str = ".env";

/// Fallback output language when `--lang` is not given.
pub const LANG_ENV_VAR: &str = "AI_COMMIT_LANG";

/// Fallback provider when `--llm-provider` is not given.
pub const PROVIDER_ENV_VAR: &str = "AI_COMMIT_PREFERRED_LLM_PROVIDER";

pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const ANTHROPIC_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Read an environment variable, treating unset and empty the same way.
pub fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
