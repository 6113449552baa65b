use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use crate::errors::AppError;
use crate::guide::topics::TopicTag;
use crate::models::scripture::{ScriptureSnippet, Translation};
use crate::scriptures::ScriptureStore;

#[derive(Debug, FromRow)]
struct ScriptureVerseRow {
    reference: String,
    text: Option<String>,
}

/// Reads the `scripture_topics` → `scripture_topic_mappings` →
/// `scripture_verses` chain, ranked by mapping relevance.
#[derive(Clone)]
pub struct PgScriptureStore {
    pool: PgPool,
}

impl PgScriptureStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScriptureStore for PgScriptureStore {
    async fn relevant_scriptures(
        &self,
        topics: &[TopicTag],
        translation: Translation,
        limit: usize,
    ) -> Result<Vec<ScriptureSnippet>, AppError> {
        let names = topic_names(topics);
        if names.is_empty() || limit == 0 {
            return Ok(vec![]);
        }

        let rows = sqlx::query_as::<_, ScriptureVerseRow>(&verse_query(translation))
            .bind(&names)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;

        debug!(
            "Fetched {} scripture rows for topics {:?} ({})",
            rows.len(),
            names,
            translation.code()
        );

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                row.text.map(|text| ScriptureSnippet {
                    reference: row.reference,
                    text,
                })
            })
            .collect())
    }
}

/// Topic rows are named with a leading capital ("Grief", "CurrentEvents").
/// `General` and `Crisis` have no rows.
fn topic_names(topics: &[TopicTag]) -> Vec<String> {
    topics
        .iter()
        .filter(|t| !matches!(t, TopicTag::General | TopicTag::Crisis))
        .map(|t| capitalize(t.as_str()))
        .collect()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The translation column is spliced in; it comes from a closed enum.
fn verse_query(translation: Translation) -> String {
    format!(
        r#"
        SELECT v.reference, COALESCE(v.{column}, v.text_esv) AS text
        FROM scripture_topic_mappings m
        JOIN scripture_topics t ON t.id = m.topic_id
        JOIN scripture_verses v ON v.id = m.scripture_id
        WHERE t.name = ANY($1)
        ORDER BY m.relevance_score DESC
        LIMIT $2
        "#,
        column = translation.column()
    )
}
