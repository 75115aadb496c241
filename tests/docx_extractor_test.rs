use std::io::Cursor;

use docsift::application::ports::{DocumentExtractor, ExtractionError};
use docsift::domain::{Document, DocumentKind};
use docsift::infrastructure::extraction::DocxExtractor;
use docx_rs::{Docx, Paragraph, Run};

fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    let mut docx = Docx::new();
    for text in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).unwrap();
    buffer.into_inner()
}

#[tokio::test]
async fn given_docx_with_paragraphs_when_extracting_then_joins_with_newlines() {
    let data = build_docx(&["Line1", "Line2"]);
    let document = Document::new("test.docx".to_string(), DocumentKind::Docx, data.len() as u64);

    let text = DocxExtractor::new().extract(&data, &document).await.unwrap();

    assert_eq!(text, "Line1\nLine2");
}

#[tokio::test]
async fn given_empty_docx_when_extracting_then_returns_empty_text() {
    let data = build_docx(&[]);
    let document = Document::new("empty.docx".to_string(), DocumentKind::Docx, data.len() as u64);

    let text = DocxExtractor::new().extract(&data, &document).await.unwrap();

    assert!(text.trim().is_empty());
}

#[tokio::test]
async fn given_wrong_kind_when_extracting_then_returns_unsupported_format() {
    let document = Document::new("test.pdf".to_string(), DocumentKind::Pdf, 4);

    let error = DocxExtractor::new()
        .extract(b"data", &document)
        .await
        .unwrap_err();

    assert!(matches!(error, ExtractionError::UnsupportedFormat(_)));
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_then_returns_extraction_failed() {
    let document = Document::new("bad.docx".to_string(), DocumentKind::Docx, 10);

    let error = DocxExtractor::new()
        .extract(b"not a docx", &document)
        .await
        .unwrap_err();

    assert!(matches!(error, ExtractionError::ExtractionFailed(_)));
}
