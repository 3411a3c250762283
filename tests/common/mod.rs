//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::path::Path;
use std::process::Command;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use commit_genie::error::{GitError, ProviderError};
use commit_genie::git::{GitOutput, GitRunner};
use commit_genie::{ProviderRegistry, TextGenerator};

/// A git stand-in that answers from a canned staged diff and records argv.
pub struct FakeGit {
    pub diff: String,
    pub commit_output: GitOutput,
    pub calls: RefCell<Vec<Vec<String>>>,
}

impl FakeGit {
    pub fn with_diff(diff: impl Into<String>) -> Self {
        Self {
            diff: diff.into(),
            commit_output: ok("[main abc1234] feat: add thing\n 1 file changed\n"),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_commit(mut self, stderr: &str) -> Self {
        self.commit_output = GitOutput {
            success: false,
            code: Some(1),
            stdout: String::new(),
            stderr: stderr.to_string(),
        };
        self
    }

    /// The argv of the `git commit` call, if there was one.
    pub fn commit_args(&self) -> Option<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .find(|args| args.first().map(String::as_str) == Some("commit"))
            .cloned()
    }
}

impl GitRunner for FakeGit {
    fn run(&self, args: &[&str]) -> Result<GitOutput, GitError> {
        self.calls
            .borrow_mut()
            .push(args.iter().map(|a| a.to_string()).collect());

        match args {
            ["rev-parse", "--is-inside-work-tree"] => Ok(ok("true\n")),
            ["diff", "--cached"] => Ok(ok(&self.diff)),
            ["commit", ..] => Ok(self.commit_output.clone()),
            other => panic!("Unexpected git call: {:?}", other),
        }
    }
}

pub fn ok(stdout: &str) -> GitOutput {
    GitOutput {
        success: true,
        code: Some(0),
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

/// A provider that returns a fixed reply and remembers every prompt.
#[derive(Clone)]
pub struct FakeProvider {
    name: &'static str,
    reply: Result<String, u16>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl FakeProvider {
    pub fn replying(name: &'static str, reply: &str) -> Self {
        Self {
            name,
            reply: Ok(reply.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider whose API always answers with `status`.
    pub fn failing(name: &'static str, status: u16) -> Self {
        Self {
            name,
            reply: Err(status),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for FakeProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn model(&self) -> &'static str {
        "fake-model"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(ProviderError::Api {
                provider: self.name,
                status: *status,
                body: "boom".to_string(),
            }),
        }
    }
}

/// Registry with the given fakes, defaulting to `gemini`.
pub fn registry_with(providers: &[FakeProvider]) -> ProviderRegistry {
    let mut registry = ProviderRegistry::new("gemini");
    for provider in providers {
        registry.register(provider.clone());
    }
    registry
}

/// Create a temporary directory for test output.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Run a git command in `dir`, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap_or_else(|e| panic!("Failed to spawn git {:?}: {}", args, e));
    assert!(status.success(), "git {:?} failed", args);
}

/// `git init` a temp directory with a local identity configured.
pub fn init_repo() -> tempfile::TempDir {
    let dir = temp_test_dir();
    git(dir.path(), &["init", "--quiet"]);
    git(dir.path(), &["config", "user.name", "Test User"]);
    git(dir.path(), &["config", "user.email", "test@example.com"]);
    git(dir.path(), &["config", "commit.gpgsign", "false"]);
    dir
}
