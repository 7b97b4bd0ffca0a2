mod llm_client;

pub use llm_client::{LlmClient, LlmConfig, DEFAULT_API_BASE};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    #[error("provider responded with HTTP {status}: {body}")]
    BadResponse { status: u16, body: String },

    #[error("transport failure: {cause}")]
    Transport { cause: String },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("could not build provider request: {0}")]
    InvalidRequest(String),
}

/// The chat-completion provider behind every generation endpoint.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// False when the server has no API credential for the provider.
    fn is_configured(&self) -> bool;

    async fn send(&self, prompt: &str, temperature: f32) -> Result<String, UpstreamError>;
}
