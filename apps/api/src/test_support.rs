//! In-memory fakes for the three external collaborators.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::config::Config;
use crate::document::{DocumentError, DocumentFetcher, DocumentReader, FileId, PdfExtractor};
use crate::llm_client::{CompletionService, GenerationSettings, LlmClient, LlmError};
use crate::state::AppState;

pub fn pages(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|page| page.iter().map(|f| f.to_string()).collect())
        .collect()
}

pub fn settings() -> GenerationSettings {
    GenerationSettings {
        model: "gemini-1.5-flash".to_string(),
        temperature: 0.7,
        max_output_tokens: 100,
    }
}

pub fn config() -> Config {
    Config {
        google_api_key: "key".to_string(),
        port: 3000,
        rust_log: "info".to_string(),
        cors_origin: "http://localhost:5173".to_string(),
        llm_model: "gemini-1.5-flash".to_string(),
        llm_temperature: 0.7,
        llm_max_output_tokens: 100,
        llm_timeout: Duration::from_secs(60),
        fetch_timeout: Duration::from_secs(30),
        llm_base_url: "http://localhost".to_string(),
        drive_base_url: "http://localhost".to_string(),
    }
}

pub fn app_state(
    fetcher: FakeFetcher,
    extractor: FakeExtractor,
    completion: FakeCompletion,
) -> AppState {
    AppState {
        documents: DocumentReader::new(
            Arc::new(fetcher),
            Arc::new(extractor),
            Duration::from_secs(5),
        ),
        llm: LlmClient::new(Arc::new(completion), settings(), Duration::from_secs(5)),
    }
}

#[derive(Clone)]
pub struct FakeFetcher {
    result: Result<Vec<u8>, String>,
    delay: Option<Duration>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl FakeFetcher {
    pub fn returning(bytes: &[u8]) -> Self {
        Self {
            result: Ok(bytes.to_vec()),
            delay: None,
            requested: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            delay: None,
            requested: Arc::default(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requested_ids(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentFetcher for FakeFetcher {
    async fn fetch(&self, id: &FileId) -> Result<Bytes, DocumentError> {
        self.requested.lock().unwrap().push(id.as_str().to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result
            .clone()
            .map(Bytes::from)
            .map_err(DocumentError::Retrieval)
    }
}

#[derive(Clone)]
pub struct FakeExtractor {
    result: Result<Vec<Vec<String>>, String>,
    received: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl FakeExtractor {
    pub fn returning(pages: Vec<Vec<String>>) -> Self {
        Self {
            result: Ok(pages),
            received: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            received: Arc::default(),
        }
    }

    pub fn received(&self) -> Vec<Vec<u8>> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl PdfExtractor for FakeExtractor {
    async fn extract_pages(&self, bytes: Bytes) -> Result<Vec<Vec<String>>, DocumentError> {
        self.received.lock().unwrap().push(bytes.to_vec());
        self.result.clone().map_err(DocumentError::Parse)
    }
}

#[derive(Clone)]
pub struct FakeCompletion {
    result: Result<String, String>,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<(String, GenerationSettings)>>>,
}

impl FakeCompletion {
    pub fn replying(text: &str) -> Self {
        Self {
            result: Ok(text.to_string()),
            delay: None,
            calls: Arc::default(),
        }
    }

    /// Fails the way the upstream API does, with `message` as the API error text.
    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            delay: None,
            calls: Arc::default(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<(String, GenerationSettings)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for FakeCompletion {
    async fn complete(
        &self,
        prompt: &str,
        settings: &GenerationSettings,
    ) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), settings.clone()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone().map_err(|message| LlmError::Api {
            status: 500,
            message,
        })
    }
}
