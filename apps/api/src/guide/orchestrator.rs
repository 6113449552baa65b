//! Response orchestrator — runs one conversational turn.
//!
//! Flow: classify crisis → (immediate: canned response, no model call) →
//!       detect topics → live-info check → compose prompt → invoke model →
//!       extract citations → flag decision.
//!
//! No retries here. An invocation error fails the whole turn; the caller
//! decides how to surface it.

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::guide::citations::extract_scripture_references;
use crate::guide::composer::build_system_prompt;
use crate::guide::crisis::{classify_crisis, CrisisLevel};
use crate::guide::prompts::IMMEDIATE_RESPONSE;
use crate::guide::topics::{classify_topics, needs_live_information, TopicTag};
use crate::llm_client::{LlmError, ModelInvoker, ModelRequest, ToolDeclaration, Usage};
use crate::models::conversation::{ChatMessage, ConversationMeta};
use crate::models::scripture::ScriptureSnippet;
use crate::models::user::UserProfile;

/// Inputs for one turn, borrowed from the caller.
#[derive(Debug, Clone, Copy)]
pub struct TurnInput<'a> {
    pub user: &'a UserProfile,
    pub conversation: &'a ConversationMeta,
    pub history: &'a [ChatMessage],
    pub new_message: &'a str,
    pub scriptures: &'a [ScriptureSnippet],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl From<Usage> for TokenUsage {
    fn from(usage: Usage) -> Self {
        Self {
            input_tokens: usage.input_tokens,
            output_tokens: usage.output_tokens,
        }
    }
}

/// Outcome of one turn. `usage` is absent on the crisis short-circuit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub content: String,
    pub crisis_level: CrisisLevel,
    pub flag_for_review: bool,
    pub scriptures: Vec<String>,
    pub topics: Vec<TopicTag>,
    pub used_web_search: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

impl GenerationResult {
    fn immediate_crisis() -> Self {
        Self {
            content: IMMEDIATE_RESPONSE.to_string(),
            crisis_level: CrisisLevel::Immediate,
            flag_for_review: true,
            scriptures: vec![],
            topics: vec![TopicTag::Crisis],
            used_web_search: false,
            usage: None,
        }
    }
}

/// Prior turns in order, followed by the new user message.
pub fn build_message_history(history: &[ChatMessage], new_message: &str) -> Vec<ChatMessage> {
    let mut messages = history.to_vec();
    messages.push(ChatMessage::user(new_message));
    messages
}

pub async fn generate(
    model: &dyn ModelInvoker,
    input: TurnInput<'_>,
) -> Result<GenerationResult, LlmError> {
    // Step 1: Classify
    let crisis_level = classify_crisis(input.new_message, input.history);

    // Step 2: A self-harm disclosure is never handed to the model
    if crisis_level == CrisisLevel::Immediate {
        warn!(
            crisis_level = %crisis_level,
            conversation_id = ?input.conversation.id,
            "Immediate crisis detected, returning crisis resources without model call"
        );
        return Ok(GenerationResult::immediate_crisis());
    }

    // Step 3-4: Topics and live-information need
    let topics = classify_topics(input.new_message, input.conversation.topic());
    let used_web_search = needs_live_information(input.new_message);
    info!(
        crisis_level = %crisis_level,
        ?topics,
        used_web_search,
        "Classified turn"
    );

    // Step 5: Compose
    let system = build_system_prompt(
        input.user,
        input.conversation,
        input.scriptures,
        crisis_level,
        used_web_search,
    );
    let messages = build_message_history(input.history, input.new_message);
    let tools = if used_web_search {
        vec![ToolDeclaration::web_search()]
    } else {
        vec![]
    };

    // Step 6: Invoke
    let response = model
        .invoke(ModelRequest {
            system: system.as_str(),
            messages: &messages,
            tools: &tools,
        })
        .await
        .map_err(|e| {
            error!("Guide response generation failed: {e}");
            e
        })?;

    // Step 7: Post-process
    let tools_used = response.tool_names();
    if !tools_used.is_empty() {
        debug!(?tools_used, "Model used tools while answering");
    }
    let content = response.text();
    let scriptures = extract_scripture_references(&content);

    // Step 8: Flag on classification alone, whatever the model said
    let flag_for_review = crisis_level.needs_review();
    if flag_for_review {
        warn!(
            crisis_level = %crisis_level,
            conversation_id = ?input.conversation.id,
            mood = ?input.conversation.initial_mood,
            primary_topic = ?input.conversation.primary_topic,
            "Conversation turn flagged for human review"
        );
    }

    Ok(GenerationResult {
        content,
        crisis_level,
        flag_for_review,
        scriptures,
        topics,
        used_web_search,
        usage: Some(response.usage.into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::prompts::topic_module;
    use crate::test_support::{text_response, StubModel};

    struct Turn {
        user: UserProfile,
        conversation: ConversationMeta,
        history: Vec<ChatMessage>,
        scriptures: Vec<ScriptureSnippet>,
    }

    impl Turn {
        fn new() -> Self {
            Self {
                user: UserProfile::default(),
                conversation: ConversationMeta::default(),
                history: vec![],
                scriptures: vec![],
            }
        }

        fn input<'a>(&'a self, new_message: &'a str) -> TurnInput<'a> {
            TurnInput {
                user: &self.user,
                conversation: &self.conversation,
                history: &self.history,
                new_message,
                scriptures: &self.scriptures,
            }
        }
    }

    #[tokio::test]
    async fn test_immediate_crisis_short_circuits_model() {
        let model = StubModel::replying(text_response("should never be sent"));
        let turn = Turn::new();

        let result = generate(&model, turn.input("I want to end my life"))
            .await
            .unwrap();

        assert_eq!(model.calls(), 0);
        assert_eq!(result.content, IMMEDIATE_RESPONSE);
        assert_eq!(result.crisis_level, CrisisLevel::Immediate);
        assert!(result.flag_for_review);
        assert_eq!(result.topics, vec![TopicTag::Crisis]);
        assert!(result.scriptures.is_empty());
        assert!(!result.used_web_search);
        assert!(result.usage.is_none());
    }

    #[tokio::test]
    async fn test_immediate_crisis_succeeds_even_if_model_is_down() {
        let model = StubModel::failing(503, "overloaded");
        let turn = Turn::new();
        let result = generate(&model, turn.input("I'm suicidal")).await.unwrap();
        assert_eq!(result.crisis_level, CrisisLevel::Immediate);
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_ordinary_turn_invokes_model_once() {
        let model = StubModel::replying(text_response(
            "As Psalm 23:1 says, the Lord is your shepherd. See also John 3:16-17 and Psalm 23:1.",
        ));
        let mut turn = Turn::new();
        turn.history = vec![
            ChatMessage::user("Good morning"),
            ChatMessage::assistant("Good morning! How are you?"),
        ];

        let result = generate(&model, turn.input("I'm worried about my job"))
            .await
            .unwrap();

        assert_eq!(model.calls(), 1);
        assert_eq!(result.crisis_level, CrisisLevel::None);
        assert!(!result.flag_for_review);
        assert_eq!(result.scriptures, vec!["Psalm 23:1", "John 3:16-17"]);
        assert_eq!(result.topics, vec![TopicTag::Anxiety, TopicTag::Purpose]);
        assert!(!result.used_web_search);
        assert_eq!(
            result.usage,
            Some(TokenUsage {
                input_tokens: 10,
                output_tokens: 20
            })
        );

        let sent = model.last_request().unwrap();
        assert_eq!(sent.messages.len(), 3);
        assert_eq!(sent.messages[2], ChatMessage::user("I'm worried about my job"));
        assert!(sent.tools.is_empty());
    }

    #[tokio::test]
    async fn test_live_info_turn_declares_web_search() {
        let model = StubModel::replying(text_response("Let me check."));
        let turn = Turn::new();

        let result = generate(&model, turn.input("Did you hear the latest news about the flood?"))
            .await
            .unwrap();

        assert!(result.used_web_search);
        let sent = model.last_request().unwrap();
        assert_eq!(sent.tools, vec![ToolDeclaration::web_search()]);
        assert!(sent.system.contains("WEB SEARCH ENABLED"));
    }

    #[tokio::test]
    async fn test_prompt_uses_primary_topic_module_only() {
        let model = StubModel::replying(text_response("ok"));
        let mut turn = Turn::new();
        turn.conversation.primary_topic = Some("anxiety".to_string());

        // Detects grief and faith, but only the primary topic's module is sent.
        generate(&model, turn.input("I doubt God since my father died"))
            .await
            .unwrap();

        let system = model.last_request().unwrap().system;
        assert!(system.contains(topic_module(TopicTag::Anxiety).unwrap()));
        assert!(!system.contains(topic_module(TopicTag::Grief).unwrap()));
        assert!(!system.contains(topic_module(TopicTag::Faith).unwrap()));
    }

    #[tokio::test]
    async fn test_flag_tracks_crisis_level() {
        let cases = [
            ("Thanks for today's verse", CrisisLevel::None, false),
            ("I've been so depressed", CrisisLevel::Pastoral, false),
            ("I feel hopeless and worthless", CrisisLevel::Elevated, true),
        ];

        for (message, level, flagged) in cases {
            let model = StubModel::replying(text_response("I'm here with you."));
            let turn = Turn::new();
            let result = generate(&model, turn.input(message)).await.unwrap();
            assert_eq!(result.crisis_level, level, "{message}");
            assert_eq!(result.flag_for_review, flagged, "{message}");
            assert_eq!(result.flag_for_review, result.crisis_level >= CrisisLevel::Elevated);
        }
    }

    #[tokio::test]
    async fn test_elevated_turn_carries_crisis_directive() {
        let model = StubModel::replying(text_response("I'm here."));
        let turn = Turn::new();
        generate(&model, turn.input("I feel hopeless, I want to give up"))
            .await
            .unwrap();
        assert!(model
            .last_request()
            .unwrap()
            .system
            .contains("CRISIS DETECTION ACTIVE (Level 2)"));
    }

    #[tokio::test]
    async fn test_invocation_error_propagates() {
        let model = StubModel::failing(500, "provider exploded");
        let turn = Turn::new();

        let err = generate(&model, turn.input("Can you pray with me?"))
            .await
            .unwrap_err();

        assert_eq!(model.calls(), 1);
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "provider exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_build_message_history_appends_new_turn() {
        let history = vec![ChatMessage::user("a"), ChatMessage::assistant("b")];
        let messages = build_message_history(&history, "c");
        assert_eq!(
            messages,
            vec![
                ChatMessage::user("a"),
                ChatMessage::assistant("b"),
                ChatMessage::user("c"),
            ]
        );
    }

    #[test]
    fn test_result_serializes_outbound_shape() {
        let result = GenerationResult {
            content: "Peace".to_string(),
            crisis_level: CrisisLevel::Pastoral,
            flag_for_review: false,
            scriptures: vec!["John 14:27".to_string()],
            topics: vec![TopicTag::CurrentEvents],
            used_web_search: true,
            usage: Some(TokenUsage {
                input_tokens: 1,
                output_tokens: 2,
            }),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["crisisLevel"], 1);
        assert_eq!(json["flagForReview"], false);
        assert_eq!(json["topics"][0], "currentEvents");
        assert_eq!(json["usedWebSearch"], true);
        assert_eq!(json["usage"]["inputTokens"], 1);
        assert_eq!(json["usage"]["outputTokens"], 2);
    }
}
