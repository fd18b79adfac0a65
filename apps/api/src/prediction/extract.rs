//! Résumé text extraction.
//!
//! `TextExtractor` is the seam between upload handling and the classifier. The default
//! backend reads PDFs with `pdf-extract`; it is CPU-bound, so handlers call it from
//! `tokio::task::spawn_blocking`.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Corrupt, encrypted or otherwise unreadable document.
    #[error("document could not be parsed: {0}")]
    Unparseable(String),

    /// Parsed fine but contains no text (e.g. image-only scans).
    #[error("document contains no extractable text")]
    Empty,
}

pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// PDF text extraction via `pdf-extract`.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        // pdf-extract panics on some malformed inputs instead of returning an error.
        let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
            .map_err(|_| ExtractionError::Unparseable("PDF parser panicked".to_string()))?
            .map_err(|e| ExtractionError::Unparseable(e.to_string()))?;
        debug!(bytes = bytes.len(), chars = text.len(), "PDF text extracted");
        Ok(text)
    }
}

/// Runs `extractor` and rejects output that is blank after trimming.
pub fn extract_non_empty(
    extractor: &dyn TextExtractor,
    bytes: &[u8],
) -> Result<String, ExtractionError> {
    let text = extractor.extract(bytes)?;
    if text.trim().is_empty() {
        return Err(ExtractionError::Empty);
    }
    Ok(text)
}
