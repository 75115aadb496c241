use docsift::domain::DocumentKind;

#[test]
fn given_pdf_extension_when_classifying_then_returns_pdf() {
    assert_eq!(DocumentKind::from_filename("report.pdf"), Some(DocumentKind::Pdf));
}

#[test]
fn given_docx_extension_when_classifying_then_returns_docx() {
    assert_eq!(DocumentKind::from_filename("letter.docx"), Some(DocumentKind::Docx));
}

#[test]
fn given_image_extensions_when_classifying_then_returns_image() {
    for filename in ["scan.jpg", "scan.jpeg", "scan.png"] {
        assert_eq!(DocumentKind::from_filename(filename), Some(DocumentKind::Image));
    }
}

#[test]
fn given_uppercase_extension_when_classifying_then_matches_case_insensitively() {
    assert_eq!(DocumentKind::from_filename("REPORT.PDF"), Some(DocumentKind::Pdf));
    assert_eq!(DocumentKind::from_filename("photo.JPG"), Some(DocumentKind::Image));
}

#[test]
fn given_unknown_extension_when_classifying_then_returns_none() {
    assert_eq!(DocumentKind::from_filename("archive.zip"), None);
    assert_eq!(DocumentKind::from_filename("notes.txt"), None);
}

#[test]
fn given_no_extension_when_classifying_then_returns_none() {
    assert_eq!(DocumentKind::from_filename("README"), None);
}

#[test]
fn given_multiple_dots_when_classifying_then_uses_last_extension() {
    assert_eq!(
        DocumentKind::from_filename("backup.tar.pdf"),
        Some(DocumentKind::Pdf)
    );
    assert_eq!(DocumentKind::from_filename("report.pdf.bak"), None);
}
