//! Scripture retrieval — the store the HTTP layer uses to pre-fetch passages
//! for a turn. The guide itself never fetches scripture.
//!
//! `AppState` holds an `Arc<dyn ScriptureStore>`; Postgres in production.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::guide::topics::TopicTag;
use crate::models::scripture::{ScriptureSnippet, Translation};

pub mod postgres;

pub use postgres::PgScriptureStore;

#[async_trait]
pub trait ScriptureStore: Send + Sync {
    /// Up to `limit` passages for `topics`, most relevant first.
    async fn relevant_scriptures(
        &self,
        topics: &[TopicTag],
        translation: Translation,
        limit: usize,
    ) -> Result<Vec<ScriptureSnippet>, AppError>;
}
