mod chat;
mod extract;
mod health;

pub use chat::chat_handler;
pub use extract::extract_handler;
pub use health::health_handler;
