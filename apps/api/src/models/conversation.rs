use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::guide::mood::MoodTag;
use crate::guide::topics::TopicTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One stored turn. History slices are in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    #[cfg(test)]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Conversation metadata as stored by the caller. Values are kept as raw
/// strings so an unrecognized mood or topic is skipped rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationMeta {
    pub id: Option<Uuid>,
    pub initial_mood: Option<String>,
    pub primary_topic: Option<String>,
}

impl ConversationMeta {
    pub fn mood(&self) -> Option<MoodTag> {
        self.initial_mood.as_deref().and_then(MoodTag::parse)
    }

    pub fn topic(&self) -> Option<TopicTag> {
        self.primary_topic.as_deref().and_then(TopicTag::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = ChatMessage::assistant("Peace be with you.");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "assistant");
    }

    #[test]
    fn test_meta_parses_known_tags() {
        let meta = ConversationMeta {
            id: None,
            initial_mood: Some("Anxious".to_string()),
            primary_topic: Some("currentEvents".to_string()),
        };
        assert_eq!(meta.mood(), Some(MoodTag::Anxious));
        assert_eq!(meta.topic(), Some(TopicTag::CurrentEvents));
    }

    #[test]
    fn test_meta_ignores_unknown_tags() {
        let meta = ConversationMeta {
            id: Some(Uuid::new_v4()),
            initial_mood: Some("sleepy".to_string()),
            primary_topic: Some("astronomy".to_string()),
        };
        assert_eq!(meta.mood(), None);
        assert_eq!(meta.topic(), None);
    }
}
