use std::panic;

use tracing::{debug, warn};

use super::{DocumentKind, ExtractError};

/// Concatenates the text of every page in document order.
///
/// Pages without extractable text (scanned images) contribute nothing; that is
/// not an error. `pdf-extract` can panic on some malformed files, so the call
/// is isolated and a panic is reported as a parse failure.
pub fn extract_pdf_text(data: &[u8]) -> Result<String, ExtractError> {
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(data))
        .map_err(|_| {
            warn!("pdf-extract panicked on malformed input");
            ExtractError::parse(DocumentKind::Pdf, "the document structure could not be read")
        })?
        .map_err(|e| ExtractError::parse(DocumentKind::Pdf, e.to_string()))?;

    debug!("Extracted text from {} PDF page(s)", pages.len());

    Ok(pages.concat())
}
