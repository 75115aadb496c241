use std::io::Cursor;

use async_trait::async_trait;
use image::{GrayImage, ImageFormat};
use tesseract::{OcrEngineMode, PageSegMode, Tesseract};

use crate::application::ports::{RecognitionError, TextRecognizer};

/// Tesseract-backed recognizer. Runs the engine in legacy+LSTM combined
/// mode with single-uniform-block page segmentation, matching how the
/// service is tuned for dense document scans.
pub struct TesseractRecognizer {
    language: String,
    datapath: Option<String>,
}

impl TesseractRecognizer {
    pub fn new(language: String, datapath: Option<String>) -> Self {
        Self { language, datapath }
    }

    fn run_engine(
        language: &str,
        datapath: Option<&str>,
        png_bytes: &[u8],
    ) -> Result<String, RecognitionError> {
        let mut engine = Tesseract::new_with_oem(
            datapath,
            Some(language),
            OcrEngineMode::TesseractLstmCombined,
        )
        .map_err(|e| RecognitionError::EngineFailed(format!("initialization failed: {e}")))?
        .set_image_from_mem(png_bytes)
        .map_err(|e| RecognitionError::EngineFailed(format!("set image failed: {e}")))?;

        engine.set_page_seg_mode(PageSegMode::PsmSingleBlock);

        engine
            .get_text()
            .map_err(|e| RecognitionError::EngineFailed(format!("text recognition failed: {e}")))
    }
}

#[async_trait]
impl TextRecognizer for TesseractRecognizer {
    #[tracing::instrument(
        skip(self, image),
        fields(width = image.width(), height = image.height())
    )]
    async fn recognize(&self, image: &GrayImage) -> Result<String, RecognitionError> {
        let mut png_bytes: Vec<u8> = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| RecognitionError::EngineFailed(format!("PNG encode failed: {e}")))?;

        let language = self.language.clone();
        let datapath = self.datapath.clone();

        tokio::task::spawn_blocking(move || {
            Self::run_engine(&language, datapath.as_deref(), &png_bytes)
        })
        .await
        .map_err(|e| RecognitionError::EngineFailed(format!("task join error: {e}")))?
    }
}
