//! PDF text extraction.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::prediction::PredictionError;

/// Returns the text of every page in document order, pages joined by `\n`.
///
/// Empty buffers, unparseable PDFs, PDFs without pages and PDFs whose pages
/// carry no text (e.g. scanned images) all fail with `DocumentParse`.
pub fn extract_text(bytes: &[u8]) -> Result<String, PredictionError> {
    if bytes.is_empty() {
        return Err(PredictionError::DocumentParse(
            "document is empty".to_string(),
        ));
    }

    // pdf-extract panics on some malformed inputs instead of returning an error.
    let pages = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }))
    .map_err(|_| {
        warn!(bytes = bytes.len(), "PDF parser aborted on malformed input");
        PredictionError::DocumentParse("document is not a readable PDF".to_string())
    })?
    .map_err(|e| PredictionError::DocumentParse(format!("document is not a readable PDF: {e}")))?;

    if pages.is_empty() {
        return Err(PredictionError::DocumentParse(
            "document has no pages".to_string(),
        ));
    }

    let text = pages.join("\n");
    if text.trim().is_empty() {
        return Err(PredictionError::DocumentParse(
            "document contains no extractable text".to_string(),
        ));
    }

    debug!(pages = pages.len(), chars = text.len(), "Extracted document text");
    Ok(text)
}
