//! End-to-end flow: staged diff → prompt → generation → validated message.

use tracing::info;

use crate::commit::generate_commit_message;
use crate::error::PipelineError;
use crate::git::{GitExecutor, retrieve_staged_diff};
use crate::llm::TextGenerator;

/// Result of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The generated commit message, trimmed.
    Message(String),
    /// The index holds no changes; the generator was not called.
    NothingStaged,
}

/// Run the pipeline once.
///
/// Stages run strictly in order and each error stops the run where it occurs.
pub async fn run<G, T>(git: &G, generator: &T) -> Result<Outcome, PipelineError>
where
    G: GitExecutor + ?Sized,
    T: TextGenerator + ?Sized,
{
    let diff = retrieve_staged_diff(git).await?;

    if diff.is_empty() {
        info!("No staged changes");
        return Ok(Outcome::NothingStaged);
    }

    let message = generate_commit_message(diff.as_str(), generator).await?;
    Ok(Outcome::Message(message))
}
