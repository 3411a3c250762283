//! The commit message pipeline: staged diff in, optional commit out.
//!
//! Every step returns a `Result`; the binary decides exit codes. User-facing
//! text goes to the injected writer so the whole flow runs under test.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::confirm::confirm;
use crate::error::PipelineError;
use crate::git::{GitRunner, MAX_DIFF_LENGTH, collect_staged_diff, execute_commit, sanitize_commit_message};
use crate::language::{Language, resolve_language};
use crate::llm::{ProviderRegistry, build_commit_prompt, sanitize_response};
use crate::selection::SelectionWarning;

pub const NOTHING_STAGED_MESSAGE: &str =
    "No staged changes found. Use 'git add' to prepare your files for the commit.";

const CONFIRM_QUESTION: &str = "Do you want to commit with this message? (y/n): ";

/// Raw selection inputs, already read from flags and the environment.
#[derive(Debug, Clone, Default)]
pub struct PipelineRequest<'a> {
    pub lang_flag: Option<&'a str>,
    pub lang_env: Option<&'a str>,
    pub provider_flag: Option<&'a str>,
    pub provider_env: Option<&'a str>,
    /// Animate a spinner on stderr while waiting for the provider.
    pub show_spinner: bool,
}

/// How a run ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NothingStaged,
    Canceled,
    Committed { output: String },
}

/// Run the whole flow once.
pub async fn run<G, R, W>(
    request: &PipelineRequest<'_>,
    registry: &ProviderRegistry,
    git: &G,
    input: R,
    mut output: W,
) -> Result<Outcome, PipelineError>
where
    G: GitRunner + ?Sized,
    R: BufRead,
    W: Write,
{
    let language = resolve_language(request.lang_flag, request.lang_env, Language::default());
    report_warnings(&mut output, &language.warnings)?;
    let language = language.value;

    let provider_name = registry.resolve_provider(request.provider_flag, request.provider_env);
    report_warnings(&mut output, &provider_name.warnings)?;

    let diff = collect_staged_diff(git)?;
    if diff.is_empty() {
        say(&mut output, NOTHING_STAGED_MESSAGE)?;
        return Ok(Outcome::NothingStaged);
    }
    if diff.truncated {
        say(
            &mut output,
            format!(
                "Warning: Diff is too long and has been truncated to {} characters.",
                MAX_DIFF_LENGTH
            ),
        )?;
    }

    let prompt = build_commit_prompt(&diff.text, language.display_name());
    let provider = registry.resolve(&provider_name.value)?;
    debug!(
        "Generating with {} ({}), prompt is {} chars",
        provider.name(),
        provider.model(),
        prompt.chars().count()
    );

    let spinner = spinner(request.show_spinner, language);
    let generated = provider.generate(&prompt).await;
    spinner.finish_and_clear();

    let message = sanitize_response(&generated?);
    if message.is_empty() {
        return Err(PipelineError::EmptyMessage);
    }

    say(&mut output, "\n--- Suggested Commit Message ---")?;
    say(&mut output, &message)?;
    say(&mut output, "------------------------------------")?;

    if sanitize_commit_message(&message) != message {
        say(
            &mut output,
            "Note: quotes, shell metacharacters and control characters will be removed before committing.",
        )?;
    }

    if !confirm(CONFIRM_QUESTION, input, &mut output)? {
        say(&mut output, "Commit canceled.")?;
        return Ok(Outcome::Canceled);
    }

    say(&mut output, "Executing commit...")?;
    let commit_output = execute_commit(git, &message)?;
    write!(output, "Commit executed successfully!\n{}", commit_output).map_err(PipelineError::Output)?;

    Ok(Outcome::Committed {
        output: commit_output,
    })
}

fn report_warnings<W: Write>(output: &mut W, warnings: &[SelectionWarning]) -> Result<(), PipelineError> {
    for warning in warnings {
        debug!("Selection warning: {}", warning);
        say(output, format!("Warning: {}", warning))?;
    }
    Ok(())
}

fn say<W: Write>(output: &mut W, line: impl Display) -> Result<(), PipelineError> {
    writeln!(output, "{}", line).map_err(PipelineError::Output)
}

fn spinner(visible: bool, language: Language) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"])
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(format!(
        "Generating commit message in {}...",
        language.display_name()
    ));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
