//! AI-generated commit messages from the staged diff.

pub mod message;
pub mod prompt;

pub use message::generate_commit_message;
pub use prompt::build_commit_prompt;
