//! Document pipeline: sharing link → file id → PDF bytes → resume text.
//!
//! The byte fetch and the PDF parser sit behind `DocumentFetcher` and
//! `PdfExtractor` so handlers can run against in-memory fakes.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::info;

pub mod drive;
pub mod pdf;

pub use drive::{extract_file_id, DriveFetcher};
pub use pdf::PdfExtractText;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to retrieve document: {0}")]
    Retrieval(String),

    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    #[error("Document fetch timed out after {0:?}")]
    Timeout(Duration),
}

/// Identifier of a shared file, as found in its sharing link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileId(String);

impl FileId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fetches the raw bytes of a shared file.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, id: &FileId) -> Result<Bytes, DocumentError>;
}

/// Splits a PDF into pages of text fragments.
/// Pages come back in document order; fragments in extractor order.
#[async_trait]
pub trait PdfExtractor: Send + Sync {
    async fn extract_pages(&self, bytes: Bytes) -> Result<Vec<Vec<String>>, DocumentError>;
}

/// Joins each page's fragments with a space, pages with a blank line,
/// and trims the whole result.
pub fn assemble_text(pages: &[Vec<String>]) -> String {
    let mut text = String::new();
    for fragments in pages {
        text.push_str(&fragments.join(" "));
        text.push_str("\n\n");
    }
    text.trim().to_string()
}

/// Retrieves a shared PDF and turns it into canonical resume text.
#[derive(Clone)]
pub struct DocumentReader {
    fetcher: Arc<dyn DocumentFetcher>,
    extractor: Arc<dyn PdfExtractor>,
    fetch_timeout: Duration,
}

impl DocumentReader {
    pub fn new(
        fetcher: Arc<dyn DocumentFetcher>,
        extractor: Arc<dyn PdfExtractor>,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            fetch_timeout,
        }
    }

    pub async fn fetch_pdf_text(&self, id: &FileId) -> Result<String, DocumentError> {
        let bytes = tokio::time::timeout(self.fetch_timeout, self.fetcher.fetch(id))
            .await
            .map_err(|_| DocumentError::Timeout(self.fetch_timeout))??;
        info!("Fetched document {id}: {} bytes", bytes.len());

        let pages = self.extractor.extract_pages(bytes).await?;
        info!("Extracted {} page(s) from document {id}", pages.len());

        Ok(assemble_text(&pages))
    }
}
