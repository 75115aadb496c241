use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pdfium_render::prelude::*;

use crate::application::ports::{DocumentExtractor, ExtractionError, TextRecognizer};
use crate::domain::{Document, DocumentKind, TableMatrix};
use crate::infrastructure::ocr::normalize_for_ocr;

use super::pdf_rasterizer::rasterize_pages;
use super::table_detector::detect_tables;
use super::table_formatter::format_table;

const TEXT_LAYER_TIMEOUT: Duration = Duration::from_secs(30);
const RASTERIZE_TIMEOUT: Duration = Duration::from_secs(300);

/// Extracts text and tables from the PDF text layer, falling back to
/// rasterization plus OCR when the document carries no selectable text.
pub struct PdfExtractor {
    recognizer: Arc<dyn TextRecognizer>,
}

struct PageContent {
    text: String,
    tables: Vec<TableMatrix>,
}

/// Page text first, then every detected table. An output that trims to
/// empty tells the caller to fall back to OCR.
fn assemble_content(pages: &[PageContent]) -> String {
    let mut content = String::new();
    for page in pages {
        if !page.text.trim().is_empty() {
            content.push('\n');
            content.push_str(&page.text);
            content.push('\n');
        }
    }
    for page in pages {
        for table in &page.tables {
            content.push('\n');
            content.push_str(&format_table(table));
            content.push('\n');
        }
    }
    content
}

impl PdfExtractor {
    pub fn new(recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self { recognizer }
    }

    fn extract_text_layer(data: &[u8]) -> Result<Vec<PageContent>, ExtractionError> {
        let pdfium = Pdfium::new(
            Pdfium::bind_to_system_library().map_err(|e| {
                ExtractionError::ExtractionFailed(format!("pdfium bind failed: {e}"))
            })?,
        );

        let doc = pdfium
            .load_pdf_from_byte_slice(data, None)
            .map_err(|e| ExtractionError::ExtractionFailed(format!("pdfium open failed: {e}")))?;

        let mut pages = Vec::with_capacity(doc.pages().len() as usize);
        for page in doc.pages().iter() {
            let text = page.text().map(|t| t.all()).unwrap_or_default();
            let tables = detect_tables(&page);
            pages.push(PageContent { text, tables });
        }

        Ok(pages)
    }

    /// Decides between the text-layer result and the OCR fallback. The
    /// recognizer is never touched while the text layer yields content.
    async fn resolve_content(
        &self,
        pages: Vec<PageContent>,
        data: Vec<u8>,
    ) -> Result<String, ExtractionError> {
        let page_count = pages.len();
        let table_count: usize = pages.iter().map(|p| p.tables.len()).sum();

        let content = assemble_content(&pages);

        if content.trim().is_empty() {
            tracing::info!(page_count, "no text layer found, running OCR fallback");
            return self.run_ocr_fallback(data).await;
        }

        tracing::info!(page_count, table_count, "extracted PDF text layer");
        Ok(content)
    }

    async fn run_ocr_fallback(&self, data: Vec<u8>) -> Result<String, ExtractionError> {
        let images = tokio::time::timeout(
            RASTERIZE_TIMEOUT,
            tokio::task::spawn_blocking(move || rasterize_pages(&data)),
        )
        .await
        .map_err(|_| ExtractionError::ExtractionFailed("PDF rasterization timed out".into()))?
        .map_err(|e| ExtractionError::ExtractionFailed(format!("task join error: {e}")))??;

        let mut page_texts = Vec::with_capacity(images.len());
        for (index, image) in images.into_iter().enumerate() {
            let normalized = tokio::task::spawn_blocking(move || normalize_for_ocr(&image))
                .await
                .map_err(|e| {
                    ExtractionError::ExtractionFailed(format!("task join error: {e}"))
                })?;

            let text = self.recognizer.recognize(&normalized).await.map_err(|e| {
                ExtractionError::ExtractionFailed(format!("page {index}: {e}"))
            })?;
            page_texts.push(text);
        }

        Ok(page_texts.join("\n"))
    }
}

#[async_trait]
impl DocumentExtractor for PdfExtractor {
    #[tracing::instrument(
        skip(self, data, document),
        fields(document_id = %document.id, filename = %document.filename)
    )]
    async fn extract(&self, data: &[u8], document: &Document) -> Result<String, ExtractionError> {
        if document.kind != DocumentKind::Pdf {
            return Err(ExtractionError::UnsupportedFormat(
                document.kind.as_str().to_string(),
            ));
        }

        let owned = data.to_vec();
        let pages = tokio::time::timeout(
            TEXT_LAYER_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_text_layer(&owned)),
        )
        .await
        .map_err(|_| ExtractionError::ExtractionFailed("PDF text extraction timed out".into()))?
        .map_err(|e| ExtractionError::ExtractionFailed(format!("task join error: {e}")))??;

        self.resolve_content(pages, data.to_vec()).await
    }
}
