use async_trait::async_trait;

use crate::domain::Document;

/// One extractor per document kind. Implementations receive the raw file
/// bytes and return a single text blob; an empty string is a valid result
/// for documents with no recoverable text.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
