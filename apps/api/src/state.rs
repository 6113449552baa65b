use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelInvoker;
use crate::scriptures::ScriptureStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model collaborator. `LlmClient` in production.
    pub model: Arc<dyn ModelInvoker>,
    /// Scripture retrieval. `PgScriptureStore` in production.
    pub scriptures: Arc<dyn ScriptureStore>,
    pub config: Config,
}
