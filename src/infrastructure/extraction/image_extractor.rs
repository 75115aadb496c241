use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{DocumentExtractor, ExtractionError, TextRecognizer};
use crate::domain::{Document, DocumentKind};
use crate::infrastructure::ocr::normalize_for_ocr;

/// Runs uploaded photographs and scans through the OCR pipeline.
pub struct ImageExtractor {
    recognizer: Arc<dyn TextRecognizer>,
}

impl ImageExtractor {
    pub fn new(recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self { recognizer }
    }
}

#[async_trait]
impl DocumentExtractor for ImageExtractor {
    #[tracing::instrument(
        skip(self, data, document),
        fields(document_id = %document.id, filename = %document.filename)
    )]
    async fn extract(&self, data: &[u8], document: &Document) -> Result<String, ExtractionError> {
        if document.kind != DocumentKind::Image {
            return Err(ExtractionError::UnsupportedFormat(
                document.kind.as_str().to_string(),
            ));
        }

        let image = image::load_from_memory(data)
            .map_err(|e| ExtractionError::ExtractionFailed(format!("image decode failed: {e}")))?;

        let normalized = tokio::task::spawn_blocking(move || normalize_for_ocr(&image))
            .await
            .map_err(|e| ExtractionError::ExtractionFailed(format!("task join error: {e}")))?;

        self.recognizer
            .recognize(&normalized)
            .await
            .map_err(|e| ExtractionError::ExtractionFailed(e.to_string()))
    }
}
