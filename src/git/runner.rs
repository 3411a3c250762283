//! Running the system `git` binary.
//!
//! All operations shell out with `std::process::Command`, inheriting the
//! user's git config. Arguments are passed as an argv list, never through a
//! shell.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::GitError;

/// Captured result of one git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    /// Standard output followed by standard error.
    pub fn combined(&self) -> String {
        let mut out = self.stdout.clone();
        out.push_str(&self.stderr);
        out
    }
}

/// Seam over git invocations so the pipeline can run without a repository.
pub trait GitRunner {
    /// Run `git <args>` and capture its output. Only spawn failures are errors;
    /// a non-zero exit is reported through [`GitOutput::success`].
    fn run(&self, args: &[&str]) -> Result<GitOutput, GitError>;
}

/// Runs the `git` found on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct SystemGit {
    workdir: Option<PathBuf>,
}

impl SystemGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git inside `dir` instead of the process working directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(dir.into()),
        }
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> Result<GitOutput, GitError> {
        debug!("Running git {}", args.join(" "));

        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(GitError::SpawnFailed)?;

        Ok(GitOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
