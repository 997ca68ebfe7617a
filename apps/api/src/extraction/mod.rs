//! Text Extractor: turns an uploaded PDF into one plain-text transcription.
//!
//! Pages are extracted independently through the `lopdf` document model that
//! `pdf-extract` re-exports. A page that yields no text (scanned image, unsupported
//! font encoding) contributes an empty segment instead of failing the document.
//! Only a buffer that cannot be opened as a PDF at all is an error.
//!
//! Extraction is blocking; request handlers go through [`ExtractionPool`].

pub mod pool;

#[cfg(test)]
pub mod fixtures;

use pdf_extract::Document;
use thiserror::Error;
use tracing::debug;

pub use pool::ExtractionPool;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document could not be parsed as PDF: {0}")]
    Parse(String),
}

/// Extracts the text of every page, in page order, joined by single newlines.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractionError::Parse(e.to_string()))?;

    // get_pages() is keyed by 1-based page number, so iteration is already in page order.
    let pages = doc.get_pages();
    let segments = pages.keys().map(|&page_number| {
        match doc.extract_text(&[page_number]) {
            // lopdf terminates every text object with a newline
            Ok(text) => Some(text.trim_end().to_string()),
            Err(e) => {
                debug!("page {page_number} yielded no text: {e}");
                None
            }
        }
    });

    let text = join_pages(segments);
    debug!(pages = pages.len(), chars = text.len(), "extracted document text");
    Ok(text)
}

/// Joins per-page segments with `\n` and trims the result. `None` stands for a
/// page without extractable text and still occupies its position.
pub fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    pages
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
