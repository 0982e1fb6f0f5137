//! Git CLI spawning.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;

/// Default git executable, resolved through PATH.
const GIT_PROGRAM: &str = "git";

/// Marker git prints on stderr when run outside a work tree.
const NOT_A_REPOSITORY_MARKER: &str = "not a git repository";

/// Trait for the git operations the pipeline needs.
///
/// This abstraction allows replacing the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitExecutor: Send + Sync {
    /// Confirm the working directory is inside a git work tree.
    async fn check_repository(&self) -> Result<(), GitError>;

    /// Return the raw `git diff --staged` output.
    async fn staged_diff(&self) -> Result<String, GitError>;
}

/// Executor that spawns the real git binary.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: PathBuf,
    work_dir: Option<PathBuf>,
}

impl SystemGit {
    /// Run `git` from PATH in the current directory.
    pub fn new() -> Self {
        Self {
            program: PathBuf::from(GIT_PROGRAM),
            work_dir: None,
        }
    }

    /// Use a different git executable (name on PATH or explicit path).
    #[must_use]
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Run git inside `dir` instead of the process working directory.
    #[must_use]
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    /// Spawn git with captured stdout and stderr.
    async fn run(&self, args: &[&str]) -> Result<Output, GitError> {
        if which::which(&self.program).is_err() {
            return Err(GitError::NotInstalled);
        }

        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.work_dir {
            command.current_dir(dir);
        }

        debug!(program = %self.program.display(), ?args, "Running git");

        command.output().await.map_err(|e| {
            // A missing work dir also reports NotFound; only blame git when the dir is fine.
            if e.kind() == ErrorKind::NotFound && self.work_dir.as_deref().is_none_or(Path::is_dir)
            {
                GitError::NotInstalled
            } else {
                GitError::SpawnFailed(e)
            }
        })
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GitExecutor for SystemGit {
    async fn check_repository(&self) -> Result<(), GitError> {
        let output = self.run(&["rev-parse", "--is-inside-work-tree"]).await?;

        if !output.status.success() {
            return Err(failure_from_stderr(&output));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim() != "true" {
            return Err(GitError::NotARepository);
        }

        Ok(())
    }

    async fn staged_diff(&self) -> Result<String, GitError> {
        let output = self.run(&["diff", "--staged"]).await?;

        if !output.status.success() {
            return Err(failure_from_stderr(&output));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Classify a non-zero git exit by its stderr.
fn failure_from_stderr(output: &Output) -> GitError {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.to_lowercase().contains(NOT_A_REPOSITORY_MARKER) {
        GitError::NotARepository
    } else {
        GitError::CommandFailed { stderr }
    }
}
