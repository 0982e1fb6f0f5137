//! Gemini text generation and response validation.

pub mod client;
pub mod response;
pub mod types;

pub use client::{GeminiClient, TextGenerator};
pub use response::validate_response;
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part, PromptFeedback,
};
