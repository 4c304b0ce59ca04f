use crate::document::DocumentReader;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Immutable after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub documents: DocumentReader,
    pub llm: LlmClient,
}
