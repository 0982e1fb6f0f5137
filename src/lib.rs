//! diffscribe - A CLI tool that writes a commit message for the staged changes.
//!
//! # Overview
//!
//! diffscribe reads `git diff --staged`, asks Gemini for a single conventional
//! commit subject line, validates the response and prints it.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod pipeline;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, GenerateError, GitError, PipelineError};
pub use git::{GitExecutor, StagedDiff, SystemGit};
pub use llm::{GeminiClient, TextGenerator};
pub use pipeline::{Outcome, run};
