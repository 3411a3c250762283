//! git-ai-commit-genie - CLI entry point.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commit_genie::config::{self, ConfigSource, LANG_ENV_VAR, PROVIDER_ENV_VAR, env_value};
use commit_genie::git::SystemGit;
use commit_genie::listing;
use commit_genie::pipeline::{self, Outcome, PipelineRequest};
use commit_genie::ProviderRegistry;

/// Generate a commit message for staged changes using an LLM.
#[derive(Parser, Debug)]
#[command(name = "git-ai-commit-genie")]
#[command(about = "Generate a Conventional Commits message for staged changes using an LLM")]
#[command(version)]
struct Cli {
    /// Language for the commit message (e.g. en, pt, es)
    #[arg(long)]
    lang: Option<String>,

    /// LLM provider to use (openai, anthropic, gemini)
    #[arg(long = "llm-provider")]
    llm_provider: Option<String>,

    /// List all supported languages and exit
    #[arg(long)]
    list_languages: bool,

    /// List all available LLM providers and exit
    #[arg(long)]
    list_providers: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_languages {
        return listing::list_languages(io::stdout().lock()).context("Failed to list languages");
    }

    let client = reqwest::Client::new();

    if cli.list_providers {
        let registry = ProviderRegistry::with_default_providers(client);
        return listing::list_providers(&registry, io::stdout().lock())
            .context("Failed to list providers");
    }

    // Step 1: Load ~/.config/git-ai-commit-genie/.env into the environment
    let source = config::load().context("Failed to load configuration")?;
    if let ConfigSource::File(path) = &source {
        tracing::debug!("Loaded config from {}", path.display());
    }

    // Step 2: Build providers now that API keys are in the environment
    let registry = ProviderRegistry::with_default_providers(client);

    let lang_env = env_value(LANG_ENV_VAR);
    let provider_env = env_value(PROVIDER_ENV_VAR);
    let request = PipelineRequest {
        lang_flag: cli.lang.as_deref(),
        lang_env: lang_env.as_deref(),
        provider_flag: cli.llm_provider.as_deref(),
        provider_env: provider_env.as_deref(),
        show_spinner: io::stderr().is_terminal(),
    };

    // Step 3: Diff -> prompt -> provider -> confirmation -> commit
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let outcome = pipeline::run(&request, &registry, &SystemGit::new(), stdin, stdout)
        .await
        .context("Failed to generate commit")?;

    if let Outcome::Committed { .. } = outcome {
        tracing::debug!("Commit created");
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` wins, otherwise warnings only unless verbose.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "commit_genie=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
