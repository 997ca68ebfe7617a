use std::sync::Arc;

use crate::config::Config;
use crate::extraction::ExtractionPool;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main` before the listener is bound; nothing in it is mutable.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: GeminiClient.
    pub llm: Arc<dyn CompletionProvider>,
    /// Bounded blocking pool for PDF text extraction.
    pub extraction: ExtractionPool,
    pub config: Config,
}
