use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{DocumentExtractor, ExtractionError};
use crate::domain::{Document, DocumentKind};

/// Classifies a file by its name and dispatches to the extractor for that
/// kind. The match on `DocumentKind` is exhaustive, so adding a kind is a
/// compile-time-checked change.
pub struct ExtractionService {
    pdf_extractor: Arc<dyn DocumentExtractor>,
    docx_extractor: Arc<dyn DocumentExtractor>,
    image_extractor: Arc<dyn DocumentExtractor>,
}

impl ExtractionService {
    pub fn new(
        pdf_extractor: Arc<dyn DocumentExtractor>,
        docx_extractor: Arc<dyn DocumentExtractor>,
        image_extractor: Arc<dyn DocumentExtractor>,
    ) -> Self {
        Self {
            pdf_extractor,
            docx_extractor,
            image_extractor,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn extract_file(&self, path: &Path) -> Result<String, ExtractionError> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ExtractionError::UnsupportedFormat(path.display().to_string()))?;

        let kind = DocumentKind::from_filename(filename).ok_or_else(|| {
            let extension = filename
                .rsplit_once('.')
                .map(|(_, ext)| ext)
                .unwrap_or(filename);
            ExtractionError::UnsupportedFormat(extension.to_string())
        })?;

        let data = tokio::fs::read(path).await.map_err(|e| {
            ExtractionError::ExtractionFailed(format!("failed to read {filename}: {e}"))
        })?;

        let document = Document::new(filename.to_string(), kind, data.len() as u64);

        tracing::debug!(
            document_id = %document.id.as_uuid(),
            kind = kind.as_str(),
            bytes = data.len(),
            "Dispatching extraction"
        );

        let extractor = match kind {
            DocumentKind::Pdf => &self.pdf_extractor,
            DocumentKind::Docx => &self.docx_extractor,
            DocumentKind::Image => &self.image_extractor,
        };

        extractor.extract(&data, &document).await
    }
}
