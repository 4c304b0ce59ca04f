use async_trait::async_trait;
use bytes::Bytes;
use tracing::warn;

use super::{DocumentError, PdfExtractor};

const PDF_MAGIC: &[u8] = b"%PDF";

/// `pdf-extract` backed extractor. Parsing is CPU-bound, so it runs inside
/// `tokio::task::spawn_blocking`.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractText;

#[async_trait]
impl PdfExtractor for PdfExtractText {
    async fn extract_pages(&self, bytes: Bytes) -> Result<Vec<Vec<String>>, DocumentError> {
        // Drive serves an HTML page instead of the file for private or oversized documents.
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(DocumentError::Parse("document is not a PDF".to_string()));
        }

        let pages = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem_by_pages(&bytes)
        })
        .await
        .map_err(|e| {
            warn!("PDF extraction task aborted: {e}");
            DocumentError::Parse("PDF extraction aborted".to_string())
        })?
        .map_err(|e| DocumentError::Parse(e.to_string()))?;

        Ok(pages.iter().map(|page| page_fragments(page)).collect())
    }
}

/// One fragment per non-blank line of the page, whitespace-trimmed.
fn page_fragments(page: &str) -> Vec<String> {
    page.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
