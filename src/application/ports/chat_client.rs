use async_trait::async_trait;

/// Single-shot relay to a hosted generative-language model. No retry, no
/// conversation memory.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn generate(&self, message: &str) -> Result<String, ChatClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
