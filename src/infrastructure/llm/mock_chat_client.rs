use async_trait::async_trait;

use crate::application::ports::{ChatClient, ChatClientError};

/// Deterministic stand-in used in tests and local runs without an API key.
#[derive(Default)]
pub struct MockChatClient;

impl MockChatClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn generate(&self, message: &str) -> Result<String, ChatClientError> {
        Ok(format!(
            "You said: \"{message}\". This is a canned reply from the mock chat client."
        ))
    }
}
