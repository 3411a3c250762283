//! Git operations via the system `git` binary.

pub mod commit;
pub mod diff;
pub mod runner;

pub use commit::{MAX_COMMIT_MESSAGE_LENGTH, execute_commit, sanitize_commit_message};
pub use diff::{
    MAX_DIFF_LENGTH, StagedDiff, collect_staged_diff, get_staged_diff, is_inside_repository,
    truncate_diff,
};
pub use runner::{GitOutput, GitRunner, SystemGit};
