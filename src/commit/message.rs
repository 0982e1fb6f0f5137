//! Commit message generation via the LLM.

use tracing::debug;

use crate::commit::prompt::build_commit_prompt;
use crate::error::GenerateError;
use crate::llm::TextGenerator;

/// Generate a commit subject line for `diff`.
///
/// An empty or whitespace-only diff is rejected before the generator is
/// called. Otherwise exactly one generation request is made.
pub async fn generate_commit_message<T>(diff: &str, generator: &T) -> Result<String, GenerateError>
where
    T: TextGenerator + ?Sized,
{
    if diff.trim().is_empty() {
        return Err(GenerateError::EmptyDiff);
    }

    let prompt = build_commit_prompt(diff);
    debug!("Commit prompt length: {} chars", prompt.len());

    generator.complete(&prompt).await
}
