use async_trait::async_trait;
use docx_rs::{DocumentChild, ParagraphChild, RunChild, read_docx};

use crate::application::ports::{DocumentExtractor, ExtractionError};
use crate::domain::{Document, DocumentKind};

/// Extracts paragraph text from Office Open XML word processing files.
#[derive(Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }
}

fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        let ParagraphChild::Run(run) = child else {
            continue;
        };
        for run_child in &run.children {
            match run_child {
                RunChild::Text(t) => text.push_str(&t.text),
                RunChild::Break(_) => text.push('\n'),
                RunChild::Tab(_) => text.push('\t'),
                _ => {}
            }
        }
    }
    text
}

#[async_trait]
impl DocumentExtractor for DocxExtractor {
    #[tracing::instrument(
        skip(self, data, document),
        fields(document_id = %document.id, filename = %document.filename)
    )]
    async fn extract(&self, data: &[u8], document: &Document) -> Result<String, ExtractionError> {
        if document.kind != DocumentKind::Docx {
            return Err(ExtractionError::UnsupportedFormat(
                document.kind.as_str().to_string(),
            ));
        }

        let docx = read_docx(data).map_err(|e| {
            ExtractionError::ExtractionFailed(format!("failed to read DOCX: {e:?}"))
        })?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(&paragraph.children)),
                _ => None,
            })
            .collect();

        tracing::info!(paragraph_count = paragraphs.len(), "extracted DOCX text");
        Ok(paragraphs.join("\n"))
    }
}
