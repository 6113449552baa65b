//! Topic routing and the live-information heuristic.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::guide::text::normalize_utterance;

/// Conversation subject tags. `General` is the fallback when nothing matches;
/// `Crisis` only marks the canned crisis response and is never detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TopicTag {
    Anxiety,
    Purpose,
    Relationships,
    Forgiveness,
    Grief,
    Faith,
    CurrentEvents,
    General,
    Crisis,
}

impl TopicTag {
    /// Tags with a keyword list, in detection order.
    pub const DETECTABLE: [TopicTag; 7] = [
        TopicTag::Anxiety,
        TopicTag::Purpose,
        TopicTag::Relationships,
        TopicTag::Forgiveness,
        TopicTag::Grief,
        TopicTag::Faith,
        TopicTag::CurrentEvents,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TopicTag::Anxiety => "anxiety",
            TopicTag::Purpose => "purpose",
            TopicTag::Relationships => "relationships",
            TopicTag::Forgiveness => "forgiveness",
            TopicTag::Grief => "grief",
            TopicTag::Faith => "faith",
            TopicTag::CurrentEvents => "currentEvents",
            TopicTag::General => "general",
            TopicTag::Crisis => "crisis",
        }
    }

    /// Parses a carried-over topic. Only detectable tags are accepted, so a
    /// stored `general` or `crisis` never leaks into a later turn.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::DETECTABLE
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            TopicTag::Anxiety => &[
                "anxious", "anxiety", "worry", "worried", "panic", "nervous", "stressed",
                "overwhelmed", "fear", "scared",
            ],
            TopicTag::Purpose => &[
                "purpose", "calling", "meaning", "direction", "career", "job", "future",
                "what should i do", "lost", "confused about life",
            ],
            TopicTag::Relationships => &[
                "relationship", "marriage", "spouse", "husband", "wife", "friend", "family",
                "parent", "child", "conflict", "argument",
            ],
            TopicTag::Forgiveness => &[
                "forgive", "forgiveness", "bitter", "resentment", "hurt", "betrayed", "wronged",
                "anger", "grudge",
            ],
            TopicTag::Grief => &[
                "grief", "loss", "died", "death", "mourning", "miss", "passed away", "funeral",
                "gone",
            ],
            TopicTag::Faith => &[
                "faith", "doubt", "believe", "belief", "question", "why god", "does god",
                "trust god", "struggling to believe",
            ],
            TopicTag::CurrentEvents => &[
                "news", "happened", "shooting", "election", "president", "assassination",
                "died today", "just heard", "breaking", "tragedy", "disaster", "war", "conflict",
            ],
            TopicTag::General | TopicTag::Crisis => &[],
        }
    }
}

/// Detects topics in `utterance`, in declaration order, each at most once.
/// A carried-over `current_topic` is appended if not already present.
/// Returns `[General]` when nothing matched and no topic was carried over.
pub fn classify_topics(utterance: &str, current_topic: Option<TopicTag>) -> Vec<TopicTag> {
    let lowered = normalize_utterance(utterance);

    let mut topics: Vec<TopicTag> = TopicTag::DETECTABLE
        .into_iter()
        .filter(|topic| topic.keywords().iter().any(|k| lowered.contains(k)))
        .collect();

    if let Some(current) = current_topic {
        if !topics.contains(&current) {
            topics.push(current);
        }
    }

    if topics.is_empty() {
        topics.push(TopicTag::General);
    }
    topics
}

const LIVE_INFO_KEYWORDS: &[&str] = &[
    "today",
    "yesterday",
    "this week",
    "recently",
    "just happened",
    "breaking news",
    "current",
    "latest",
    "what happened to",
    "is he alive",
    "is she alive",
    "did they",
    "have they",
    "news about",
    "heard about",
    "assassination",
    "shooting",
    "election",
    "died",
    "death of",
    "killed",
    "attack",
    "what's going on with",
    "update on",
    "status of",
];

// Questions about whether a named person is alive, in office, and so on.
static PERSON_STATUS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)is .+ (still )?(alive|dead|president|ceo|married)",
        r"(?i)did .+ (die|pass away|get killed|resign)",
        r"(?i)what happened to .+",
        r"(?i)where is .+ (now|today)",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("person-status pattern is valid"))
    .collect()
});

/// Heuristic for messages that likely need facts newer than the model's
/// training data. Only toggles live search; never affects classification.
pub fn needs_live_information(utterance: &str) -> bool {
    let lowered = normalize_utterance(utterance);
    LIVE_INFO_KEYWORDS.iter().any(|k| lowered.contains(k))
        || PERSON_STATUS_PATTERNS.iter().any(|p| p.is_match(utterance))
}
