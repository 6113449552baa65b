//! Test doubles for the model and scripture collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::Config;
use crate::errors::AppError;
use crate::guide::topics::TopicTag;
use crate::llm_client::{
    ContentBlock, LlmError, ModelInvoker, ModelRequest, ModelResponse, ToolDeclaration, Usage,
};
use crate::models::conversation::ChatMessage;
use crate::models::scripture::{ScriptureSnippet, Translation};
use crate::scriptures::ScriptureStore;

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/companion_test".to_string(),
        anthropic_api_key: "test-key".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
        scripture_limit: 5,
    }
}

pub fn text_response(text: &str) -> ModelResponse {
    ModelResponse {
        content: vec![ContentBlock::Text {
            text: text.to_string(),
        }],
        usage: Usage {
            input_tokens: 10,
            output_tokens: 20,
        },
    }
}

/// Owned copy of what the orchestrator sent.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub system: String,
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<ToolDeclaration>,
}

enum Script {
    Reply(ModelResponse),
    Fail { status: u16, message: String },
}

pub struct StubModel {
    script: Script,
    calls: AtomicUsize,
    last: Mutex<Option<RecordedRequest>>,
}

impl StubModel {
    pub fn replying(response: ModelResponse) -> Self {
        Self::new(Script::Reply(response))
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self::new(Script::Fail {
            status,
            message: message.to_string(),
        })
    }

    fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelInvoker for StubModel {
    async fn invoke(&self, request: ModelRequest<'_>) -> Result<ModelResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(RecordedRequest {
            system: request.system.to_string(),
            messages: request.messages.to_vec(),
            tools: request.tools.to_vec(),
        });

        match &self.script {
            Script::Reply(response) => Ok(response.clone()),
            Script::Fail { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

type Lookup = (Vec<TopicTag>, Translation, usize);

pub struct StubScriptureStore {
    passages: Option<Vec<ScriptureSnippet>>,
    delay: Option<Duration>,
    last: Mutex<Option<Lookup>>,
}

impl StubScriptureStore {
    pub fn empty() -> Self {
        Self::with(vec![])
    }

    pub fn with(passages: Vec<(&str, &str)>) -> Self {
        Self {
            passages: Some(
                passages
                    .into_iter()
                    .map(|(reference, text)| ScriptureSnippet {
                        reference: reference.to_string(),
                        text: text.to_string(),
                    })
                    .collect(),
            ),
            delay: None,
            last: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            passages: None,
            delay: None,
            last: Mutex::new(None),
        }
    }

    /// Waits out a pool acquire timeout before failing, like an unreachable
    /// database behind a lazy pool.
    pub fn hanging() -> Self {
        Self {
            delay: Some(Duration::from_secs(30)),
            ..Self::failing()
        }
    }

    pub fn last_lookup(&self) -> Option<Lookup> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScriptureStore for StubScriptureStore {
    async fn relevant_scriptures(
        &self,
        topics: &[TopicTag],
        translation: Translation,
        limit: usize,
    ) -> Result<Vec<ScriptureSnippet>, AppError> {
        *self.last.lock().unwrap() = Some((topics.to_vec(), translation, limit));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.passages {
            Some(passages) => Ok(passages.iter().take(limit).cloned().collect()),
            None => Err(AppError::Database(sqlx::Error::PoolTimedOut)),
        }
    }
}
