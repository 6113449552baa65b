//! Crisis classifier — keyword tiers mapped onto an ordered severity level.
//!
//! Precedence is fixed: any immediate keyword wins outright, then two or more
//! elevated hits in the message, then an elevated build-up across the last
//! three user turns, then any pastoral keyword.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::guide::text::normalize_utterance;
use crate::models::conversation::{ChatMessage, Role};

/// Severity of self-harm or distress risk. Higher levels dominate lower ones.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum CrisisLevel {
    #[default]
    None = 0,
    Pastoral = 1,
    Elevated = 2,
    Immediate = 3,
}

impl CrisisLevel {
    /// Whether a human support workflow should see this turn.
    pub fn needs_review(self) -> bool {
        self >= CrisisLevel::Elevated
    }
}

impl From<CrisisLevel> for u8 {
    fn from(level: CrisisLevel) -> Self {
        level as u8
    }
}

impl TryFrom<u8> for CrisisLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CrisisLevel::None),
            1 => Ok(CrisisLevel::Pastoral),
            2 => Ok(CrisisLevel::Elevated),
            3 => Ok(CrisisLevel::Immediate),
            other => Err(format!("crisis level must be 0-3, got {other}")),
        }
    }
}

impl fmt::Display for CrisisLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// Any one of these ends classification at `Immediate`.
pub const IMMEDIATE_KEYWORDS: &[&str] = &[
    "kill myself",
    "end my life",
    "suicide",
    "suicidal",
    "don't want to live",
    "want to die",
    "end it all",
    "no reason to live",
    "better off dead",
    "take my life",
    "not worth living",
    "going to hurt myself",
];

pub const ELEVATED_KEYWORDS: &[&str] = &[
    "hopeless",
    "worthless",
    "can't go on",
    "what's the point",
    "no one cares",
    "better without me",
    "self-harm",
    "cutting",
    "hurting myself",
    "give up",
    "no hope",
    "want the pain to stop",
    "disappear",
    "burden to everyone",
    "can't take it anymore",
];

pub const PASTORAL_KEYWORDS: &[&str] = &[
    "depressed",
    "anxious all the time",
    "can't sleep",
    "can't eat",
    "panic attacks",
    "abuse",
    "trauma",
    "addiction",
    "alcoholic",
    "eating disorder",
    "voices",
    "paranoid",
    "manic",
];

/// Distinct elevated keywords needed in a single message.
const ELEVATED_MESSAGE_THRESHOLD: usize = 2;
/// Number of most recent user turns rescanned for build-up.
const ESCALATION_WINDOW: usize = 3;
/// Elevated hits summed across the window.
const ESCALATION_THRESHOLD: usize = 3;

/// Classifies `utterance` in the context of prior turns.
///
/// The escalation rule rescans the stored history on every call instead of
/// keeping a running count, so edits or deletions upstream are reflected.
pub fn classify_crisis(utterance: &str, history: &[ChatMessage]) -> CrisisLevel {
    let lowered = normalize_utterance(utterance);

    if contains_any(&lowered, IMMEDIATE_KEYWORDS) {
        return CrisisLevel::Immediate;
    }

    if count_hits(&lowered, ELEVATED_KEYWORDS) >= ELEVATED_MESSAGE_THRESHOLD {
        return CrisisLevel::Elevated;
    }

    if escalation_score(history).is_some_and(|score| score >= ESCALATION_THRESHOLD) {
        return CrisisLevel::Elevated;
    }

    if contains_any(&lowered, PASTORAL_KEYWORDS) {
        return CrisisLevel::Pastoral;
    }

    CrisisLevel::None
}

/// Elevated hits across the last three user turns, or `None` when fewer than
/// three user turns exist.
fn escalation_score(history: &[ChatMessage]) -> Option<usize> {
    let user_turns: Vec<&ChatMessage> = history.iter().filter(|m| m.role == Role::User).collect();
    if user_turns.len() < ESCALATION_WINDOW {
        return None;
    }

    let window = &user_turns[user_turns.len() - ESCALATION_WINDOW..];
    Some(
        window
            .iter()
            .map(|m| count_hits(&normalize_utterance(&m.content), ELEVATED_KEYWORDS))
            .sum(),
    )
}

fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lowered.contains(k))
}

fn count_hits(lowered: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| lowered.contains(*k)).count()
}
