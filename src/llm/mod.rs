//! Chat-completion integration
//!
//! The rest of the service only sees [`CompletionProvider`]: a prompt pair goes
//! in, free text comes out, or a [`GenerationError`] explains why not.

use async_trait::async_trait;

pub mod error;
pub mod groq;

pub use error::GenerationError;
pub use groq::GroqClient;

/// System and user instructions for a single-turn completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run one completion and return the model's text
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, GenerationError>;
}
