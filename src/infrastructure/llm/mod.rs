mod gemini_client;
mod mock_chat_client;

pub use gemini_client::{DEFAULT_BASE_URL, GeminiClient};
pub use mock_chat_client::MockChatClient;
