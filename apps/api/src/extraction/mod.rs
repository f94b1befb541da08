//! Document Extractor — turns an uploaded résumé (PDF or DOCX) into plain text.
//!
//! Output is trimmed at both ends only. Internal whitespace, bullets and
//! encoding artifacts are passed through untouched. An empty result is a
//! valid outcome (scanned PDFs), distinct from a parse failure.

use thiserror::Error;

pub mod docx;
pub mod pdf;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse {kind}: {message}")]
    Parse {
        kind: DocumentKind,
        message: String,
    },
}

impl ExtractError {
    pub(crate) fn parse(kind: DocumentKind, message: impl Into<String>) -> Self {
        ExtractError::Parse {
            kind,
            message: message.into(),
        }
    }
}

/// The document formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Resolves a declared type tag (short extension or MIME type, any case).
    pub fn from_type_tag(type_tag: &str) -> Result<Self, ExtractError> {
        let tag = type_tag.trim().to_ascii_lowercase();
        match tag.as_str() {
            "pdf" | PDF_MIME => Ok(DocumentKind::Pdf),
            "docx" | DOCX_MIME => Ok(DocumentKind::Docx),
            _ => Err(ExtractError::UnsupportedFormat(type_tag.to_string())),
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Pdf => f.write_str("PDF"),
            DocumentKind::Docx => f.write_str("DOCX"),
        }
    }
}

/// Extracts plain text from raw document bytes.
pub fn extract_text(data: &[u8], type_tag: &str) -> Result<String, ExtractError> {
    let text = match DocumentKind::from_type_tag(type_tag)? {
        DocumentKind::Pdf => pdf::extract_pdf_text(data)?,
        DocumentKind::Docx => docx::extract_docx_text(data)?,
    };
    Ok(text.trim().to_string())
}

/// Picks the type tag for an upload: the declared content type when it is
/// meaningful, otherwise the file-name extension.
pub fn resolve_type_tag(content_type: Option<&str>, file_name: Option<&str>) -> String {
    let declared = content_type
        .map(str::trim)
        .filter(|ct| !ct.is_empty() && !ct.eq_ignore_ascii_case("application/octet-stream"));

    if let Some(ct) = declared {
        // Strip parameters such as "; charset=binary"
        return ct.split(';').next().unwrap_or(ct).trim().to_string();
    }

    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_string())
        .unwrap_or_default()
}

/// In-memory document fixtures shared by tests across the crate.
#[cfg(test)]
pub(crate) mod test_support {
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    pub fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        pack_docx(docx)
    }

    pub fn pack_docx(docx: Docx) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tags_resolve_case_insensitively() {
        assert_eq!(DocumentKind::from_type_tag("PDF").unwrap(), DocumentKind::Pdf);
        assert_eq!(
            DocumentKind::from_type_tag("application/pdf").unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(DocumentKind::from_type_tag("docx").unwrap(), DocumentKind::Docx);
        assert_eq!(
            DocumentKind::from_type_tag(
                "Application/VND.openxmlformats-officedocument.wordprocessingml.document"
            )
            .unwrap(),
            DocumentKind::Docx
        );
    }

    #[test]
    fn test_unrecognized_type_is_unsupported_format() {
        let err = extract_text(b"plain old text", "text/plain").unwrap_err();
        match err {
            ExtractError::UnsupportedFormat(tag) => assert_eq!(tag, "text/plain"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_legacy_doc_is_unsupported() {
        assert!(matches!(
            extract_text(b"\xD0\xCF\x11\xE0", "application/msword"),
            Err(ExtractError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_resolve_type_tag_prefers_declared_content_type() {
        assert_eq!(
            resolve_type_tag(Some("application/pdf"), Some("resume.docx")),
            "application/pdf"
        );
        assert_eq!(
            resolve_type_tag(Some("application/pdf; charset=binary"), None),
            "application/pdf"
        );
    }

    #[test]
    fn test_resolve_type_tag_falls_back_to_extension() {
        assert_eq!(
            resolve_type_tag(Some("application/octet-stream"), Some("cv.final.DOCX")),
            "DOCX"
        );
        assert_eq!(resolve_type_tag(None, Some("resume.pdf")), "pdf");
        assert_eq!(resolve_type_tag(None, Some("resume")), "");
        assert_eq!(resolve_type_tag(None, None), "");
    }
}
