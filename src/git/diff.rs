//! Staged diff retrieval and truncation.

use tracing::debug;

use crate::error::GitError;

use super::runner::GitRunner;

/// Maximum characters of diff sent to a provider.
pub const MAX_DIFF_LENGTH: usize = 10_000;

/// The staged changeset, possibly cut down to [`MAX_DIFF_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedDiff {
    pub text: String,
    pub truncated: bool,
    /// Length in characters before truncation.
    pub original_len: usize,
}

impl StagedDiff {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Check that the working directory is inside a git work tree.
pub fn is_inside_repository<G: GitRunner + ?Sized>(git: &G) -> Result<bool, GitError> {
    let output = git.run(&["rev-parse", "--is-inside-work-tree"])?;

    if !output.success {
        return Err(GitError::NotARepository {
            stderr: output.stderr.trim().to_string(),
        });
    }

    Ok(output.stdout.trim() == "true")
}

/// Fetch `git diff --cached` as text. An empty string means nothing is staged.
pub fn get_staged_diff<G: GitRunner + ?Sized>(git: &G) -> Result<String, GitError> {
    let output = git.run(&["diff", "--cached"])?;

    if !output.success {
        return Err(GitError::DiffFailed {
            code: output.code,
            stderr: output.stderr.trim().to_string(),
        });
    }

    debug!("Staged diff is {} bytes", output.stdout.len());
    Ok(output.stdout)
}

/// Cut `diff` to exactly [`MAX_DIFF_LENGTH`] characters if it is longer.
///
/// No attempt is made to cut at a line or file boundary.
pub fn truncate_diff(diff: String) -> StagedDiff {
    let original_len = diff.chars().count();

    if original_len <= MAX_DIFF_LENGTH {
        return StagedDiff {
            text: diff,
            truncated: false,
            original_len,
        };
    }

    debug!(
        "Diff has {} characters, truncating to {}",
        original_len, MAX_DIFF_LENGTH
    );
    let text: String = diff.chars().take(MAX_DIFF_LENGTH).collect();
    StagedDiff {
        text,
        truncated: true,
        original_len,
    }
}

/// Verify the repository, then fetch and truncate the staged diff.
pub fn collect_staged_diff<G: GitRunner + ?Sized>(git: &G) -> Result<StagedDiff, GitError> {
    if !is_inside_repository(git)? {
        // Inside .git itself rev-parse succeeds but prints "false".
        return Err(GitError::NotARepository {
            stderr: "not inside a work tree".to_string(),
        });
    }

    let diff = get_staged_diff(git)?;
    Ok(truncate_diff(diff))
}
