//! Creating the commit with a sanitized message.

use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use crate::error::CommitError;

use super::runner::GitRunner;

/// Longest message passed to `git commit`, in characters.
pub const MAX_COMMIT_MESSAGE_LENGTH: usize = 2000;

/// Characters with special meaning to a shell.
const SHELL_HAZARDS: &[char] = &[';', '&', '|', '`', '$', '(', ')', '<', '>', '\\', '"', '\''];

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{6,}").expect("newline pattern is valid"));

/// Strip control characters and shell metacharacters from a commit message.
///
/// Newlines and tabs survive. Runs of six or more newlines collapse to a
/// single blank line, and the result is capped at
/// [`MAX_COMMIT_MESSAGE_LENGTH`] characters.
pub fn sanitize_commit_message(message: &str) -> String {
    let stripped: String = message
        .chars()
        .filter(|c| !(c.is_control() && *c != '\n' && *c != '\t'))
        .filter(|c| !SHELL_HAZARDS.contains(c))
        .collect();

    let collapsed = EXCESS_NEWLINES.replace_all(&stripped, "\n\n");
    let trimmed = collapsed.trim();

    if trimmed.chars().count() > MAX_COMMIT_MESSAGE_LENGTH {
        trimmed.chars().take(MAX_COMMIT_MESSAGE_LENGTH).collect()
    } else {
        trimmed.to_string()
    }
}

/// Sanitize `message` and run `git commit -m <message>`.
///
/// Returns git's combined stdout and stderr. A message that is empty after
/// sanitization is rejected without running git.
pub fn execute_commit<G: GitRunner + ?Sized>(git: &G, message: &str) -> Result<String, CommitError> {
    let sanitized = sanitize_commit_message(message);
    if sanitized.is_empty() {
        return Err(CommitError::EmptyAfterSanitization);
    }

    debug!("Committing with {} character message", sanitized.chars().count());
    let output = git.run(&["commit", "-m", &sanitized])?;

    if !output.success {
        return Err(CommitError::Failed {
            output: output.combined(),
        });
    }

    Ok(output.combined())
}
