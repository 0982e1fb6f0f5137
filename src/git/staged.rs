//! Staged diff collection.

use tracing::debug;

use crate::error::GitError;
use crate::git::subprocess::GitExecutor;

/// Staged changes as produced by `git diff --staged`.
///
/// The text is opaque: it is never parsed, only forwarded to the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StagedDiff {
    text: String,
}

impl StagedDiff {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when nothing is staged (empty or whitespace-only output).
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Confirm the working directory is a repository, then read the staged diff.
///
/// The diff is not requested when the repository check fails.
pub async fn retrieve_staged_diff<G>(git: &G) -> Result<StagedDiff, GitError>
where
    G: GitExecutor + ?Sized,
{
    git.check_repository().await?;

    let text = git.staged_diff().await?;
    debug!(bytes = text.len(), "Collected staged diff");

    Ok(StagedDiff::new(text))
}
