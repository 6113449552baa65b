//! Axum route handlers for the Guide API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::guide::crisis::{classify_crisis, CrisisLevel};
use crate::guide::orchestrator::{generate, GenerationResult, TurnInput};
use crate::guide::prompts::crisis_response;
use crate::guide::topics::{classify_topics, needs_live_information, TopicTag};
use crate::models::conversation::{ChatMessage, ConversationMeta};
use crate::models::scripture::ScriptureSnippet;
use crate::models::user::UserProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondRequest {
    #[serde(default)]
    pub user: UserProfile,
    #[serde(default)]
    pub conversation: ConversationMeta,
    #[serde(default)]
    pub message_history: Vec<ChatMessage>,
    pub new_message: String,
    /// Pre-fetched passages. When absent they are looked up by topic.
    pub scriptures: Option<Vec<ScriptureSnippet>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    pub new_message: String,
    #[serde(default)]
    pub message_history: Vec<ChatMessage>,
    pub current_topic: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    pub crisis_level: CrisisLevel,
    pub topics: Vec<TopicTag>,
    pub needs_live_information: bool,
    /// Pre-authored reply for the level, for support staff reviewing a turn.
    pub canned_response: Option<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/guide/respond
///
/// Runs one conversational turn. Persisting the turn and notifying support
/// when `flagForReview` is set are left to the caller.
pub async fn handle_respond(
    State(state): State<AppState>,
    Json(request): Json<RespondRequest>,
) -> Result<Json<GenerationResult>, AppError> {
    let RespondRequest {
        user,
        conversation,
        message_history,
        new_message,
        scriptures,
    } = request;

    if new_message.trim().is_empty() {
        return Err(AppError::Validation("newMessage cannot be empty".to_string()));
    }

    // The immediate crisis reply is answered locally and must not wait on
    // the scripture store.
    let immediate = classify_crisis(&new_message, &message_history) == CrisisLevel::Immediate;
    let scriptures = match scriptures {
        Some(scriptures) => scriptures,
        None if immediate => vec![],
        None => fetch_scriptures(&state, &user, &conversation, &new_message).await,
    };

    let result = generate(
        state.model.as_ref(),
        TurnInput {
            user: &user,
            conversation: &conversation,
            history: &message_history,
            new_message: &new_message,
            scriptures: &scriptures,
        },
    )
    .await
    .map_err(|e| AppError::Llm(format!("Guide response failed: {e}")))?;

    Ok(Json(result))
}

/// POST /api/v1/guide/classify
///
/// Classification preview. Pure; never calls the model.
pub async fn handle_classify(
    Json(request): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let current_topic = request.current_topic.as_deref().and_then(TopicTag::parse);
    let crisis_level = classify_crisis(&request.new_message, &request.message_history);

    Json(ClassifyResponse {
        crisis_level,
        topics: classify_topics(&request.new_message, current_topic),
        needs_live_information: needs_live_information(&request.new_message),
        canned_response: crisis_response(crisis_level),
    })
}

/// Scripture lookup never fails a turn; errors degrade to no passages.
async fn fetch_scriptures(
    state: &AppState,
    user: &UserProfile,
    conversation: &ConversationMeta,
    new_message: &str,
) -> Vec<ScriptureSnippet> {
    let topics = classify_topics(new_message, conversation.topic());

    match state
        .scriptures
        .relevant_scriptures(&topics, user.translation(), state.config.scripture_limit)
        .await
    {
        Ok(scriptures) => scriptures,
        Err(e) => {
            warn!("Scripture lookup failed for topics {topics:?}: {e}");
            vec![]
        }
    }
}
