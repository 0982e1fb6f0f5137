//! Error types for diffscribe modules using thiserror.

use thiserror::Error;

/// Errors from reading the staged diff through the git CLI.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not inside a Git repository.")]
    NotARepository,

    #[error("Git command not found. Please ensure Git is installed and in your system's PATH.")]
    NotInstalled,

    #[error("git command failed: {stderr}")]
    CommandFailed { stderr: String },

    #[error("An unexpected error occurred while running git")]
    SpawnFailed(#[source] std::io::Error),
}

/// Errors from loading runtime configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY environment variable not set.")]
    MissingApiKey,
}

/// Errors from commit message generation.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("No diff content provided to generate a commit message.")]
    EmptyDiff,

    #[error("GEMINI_API_KEY environment variable not set.")]
    MissingApiKey,

    #[error("Failed to communicate with LLM: {0}")]
    Request(String),

    #[error("Failed to communicate with LLM: API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("LLM did not generate a valid commit message. Response structure unexpected.")]
    MalformedResponse,
}

/// Errors surfaced by the end-to-end pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}
