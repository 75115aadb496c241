use async_trait::async_trait;
use image::GrayImage;

/// OCR capability seam. Callers hand over an already-normalized image;
/// engine failures propagate untouched.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image: &GrayImage) -> Result<String, RecognitionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("ocr engine failed: {0}")]
    EngineFailed(String),
}
