//! Completion transports

use async_trait::async_trait;

pub mod openai;

// Re-export for convenience
pub use openai::OpenAiTransport;

/// One network round-trip for a completion request
#[async_trait]
pub trait Transport: Send + Sync
{   /// Send the request and return the generated text
    async fn complete(
      &self
    , request: &crate::request::CompletionRequest
    ) -> Result<String, crate::error::Error>;
}
