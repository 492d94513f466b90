use std::sync::Arc;

use crate::llm_client::TextProvider;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Nothing here is mutated after startup; requests share no other state.
#[derive(Clone)]
pub struct AppState {
    /// Model provider. Default: `GeminiClient`. Tests inject a stub.
    pub provider: Arc<dyn TextProvider>,
}
