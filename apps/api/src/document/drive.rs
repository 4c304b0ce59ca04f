//! Google Drive sharing links and public file download.

use async_trait::async_trait;
use bytes::Bytes;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;

use super::{DocumentError, DocumentFetcher, FileId};

/// Matches the `/d/<id>/` segment of a sharing link.
static FILE_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/d/([A-Za-z0-9_-]+)/").expect("file id pattern is valid"));

/// Pulls the file id out of a sharing link. Returns `None` if the link has no
/// `/d/<id>/` segment.
pub fn extract_file_id(url: &str) -> Option<FileId> {
    FILE_ID_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| FileId(m.as_str().to_string()))
}

/// Downloads publicly shared files through Drive's `uc?export=download` endpoint.
#[derive(Clone)]
pub struct DriveFetcher {
    client: Client,
    base_url: String,
}

impl DriveFetcher {
    pub fn new(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl DocumentFetcher for DriveFetcher {
    async fn fetch(&self, id: &FileId) -> Result<Bytes, DocumentError> {
        let response = self
            .client
            .get(format!("{}/uc", self.base_url))
            .query(&[("export", "download"), ("id", id.as_str())])
            .send()
            .await
            .map_err(|e| DocumentError::Retrieval(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocumentError::Retrieval(format!(
                "file store returned status {status}"
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| DocumentError::Retrieval(e.to_string()))
    }
}
