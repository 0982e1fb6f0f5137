//! Defensive extraction of the generated commit message.

use tracing::debug;

use crate::error::GenerateError;
use crate::llm::types::GenerateContentResponse;

/// Extract the first candidate's first text part, trimmed.
///
/// Every level (candidates, content, parts, text) may be absent when the API
/// filters or blocks output. Any gap, or text that is empty once trimmed,
/// yields [`GenerateError::MalformedResponse`].
pub fn validate_response(response: &GenerateContentResponse) -> Result<String, GenerateError> {
    let first_candidate = response.candidates.as_deref().and_then(|c| c.first());

    let text = first_candidate
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| content.parts.as_deref())
        .and_then(|parts| parts.first())
        .and_then(|part| part.text.as_deref())
        .map(str::trim)
        .filter(|text| !text.is_empty());

    match text {
        Some(text) => Ok(text.to_string()),
        None => {
            let block_reason = response
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.as_deref());
            let finish_reason = first_candidate.and_then(|c| c.finish_reason.as_deref());
            debug!(
                ?block_reason,
                ?finish_reason,
                "Response carried no usable text"
            );
            Err(GenerateError::MalformedResponse)
        }
    }
}
