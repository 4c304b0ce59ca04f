/// LLM Client — the single point of entry for all completion calls.
///
/// ARCHITECTURAL RULE: handlers never talk to the completion API directly.
/// They go through `LlmClient::invoke`, which pins the generation settings,
/// applies the timeout and trims the result.
///
/// No retries: a failed call is reported to the caller as-is.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

pub mod gemini;

pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM call timed out after {0:?}")]
    Timeout(Duration),
}

impl LlmError {
    /// The message shown to API callers. API failures surface the upstream
    /// message verbatim; everything else uses the error's display text.
    pub fn upstream_message(&self) -> String {
        match self {
            LlmError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Generation parameters applied to every completion call.
/// Built once from `Config` at startup and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// A remote text-completion backend. Implement this to swap providers
/// (or substitute a fake in tests) without touching the handlers.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        settings: &GenerationSettings,
    ) -> Result<String, LlmError>;
}

/// The single completion invoker used by all handlers.
#[derive(Clone)]
pub struct LlmClient {
    service: Arc<dyn CompletionService>,
    settings: GenerationSettings,
    timeout: Duration,
}

impl LlmClient {
    pub fn new(
        service: Arc<dyn CompletionService>,
        settings: GenerationSettings,
        timeout: Duration,
    ) -> Self {
        Self {
            service,
            settings,
            timeout,
        }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Sends `prompt` unmodified and returns the trimmed completion text.
    pub async fn invoke(&self, prompt: &str) -> Result<String, LlmError> {
        debug!("Invoking completion: prompt_chars={}", prompt.len());

        let completion = tokio::time::timeout(
            self.timeout,
            self.service.complete(prompt, &self.settings),
        )
        .await
        .map_err(|_| LlmError::Timeout(self.timeout))??;

        let completion = completion.trim().to_string();
        info!(
            "Completion received: model={}, chars={}",
            self.settings.model,
            completion.len()
        );
        Ok(completion)
    }
}
