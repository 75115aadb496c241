mod chat_client;
mod document_extractor;
mod text_recognizer;

pub use chat_client::{ChatClient, ChatClientError};
pub use document_extractor::{DocumentExtractor, ExtractionError};
pub use text_recognizer::{RecognitionError, TextRecognizer};
