//! Mood configuration: tone and approach guidance keyed by the mood a user
//! picked when opening the conversation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTag {
    Grateful,
    Struggling,
    Seeking,
    Anxious,
    Strong,
    Questioning,
}

impl MoodTag {
    pub const ALL: [MoodTag; 6] = [
        MoodTag::Grateful,
        MoodTag::Struggling,
        MoodTag::Seeking,
        MoodTag::Anxious,
        MoodTag::Strong,
        MoodTag::Questioning,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MoodTag::Grateful => "grateful",
            MoodTag::Struggling => "struggling",
            MoodTag::Seeking => "seeking",
            MoodTag::Anxious => "anxious",
            MoodTag::Strong => "strong",
            MoodTag::Questioning => "questioning",
        }
    }

    /// Lenient parse: surrounding whitespace and case are ignored.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(value))
    }
}

/// Guidance attached to a mood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodConfig {
    pub tone: &'static str,
    pub approach: &'static str,
}

pub fn mood_config(mood: MoodTag) -> MoodConfig {
    match mood {
        MoodTag::Grateful => MoodConfig {
            tone: "celebratory, affirming, joining in praise",
            approach: "Amplify their joy and connect it to God's character",
        },
        MoodTag::Struggling => MoodConfig {
            tone: "gentle, empathetic, unhurried",
            approach: "Sit with them before offering any solutions",
        },
        MoodTag::Seeking => MoodConfig {
            tone: "curious, exploratory, encouraging",
            approach: "Guide discovery rather than lecture",
        },
        MoodTag::Anxious => MoodConfig {
            tone: "calm, reassuring, grounding",
            approach: "Help ground them in truth and give them breathing space",
        },
        MoodTag::Strong => MoodConfig {
            tone: "affirming, gently challenging, equipping",
            approach: "Encourage good stewardship of this season",
        },
        MoodTag::Questioning => MoodConfig {
            tone: "non-defensive, curious, validating",
            approach: "Explore their questions without getting defensive",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mood_has_guidance() {
        for mood in MoodTag::ALL {
            let config = mood_config(mood);
            assert!(!config.tone.is_empty(), "{mood:?} has no tone");
            assert!(!config.approach.is_empty(), "{mood:?} has no approach");
        }
    }

    #[test]
    fn test_parse_round_trips_names() {
        for mood in MoodTag::ALL {
            assert_eq!(MoodTag::parse(mood.as_str()), Some(mood));
        }
        assert_eq!(MoodTag::parse("  GRATEFUL "), Some(MoodTag::Grateful));
        assert_eq!(MoodTag::parse("bored"), None);
        assert_eq!(MoodTag::parse(""), None);
    }

    #[test]
    fn test_struggling_mood_sits_before_solving() {
        let config = mood_config(MoodTag::Struggling);
        assert!(config.approach.contains("before offering"));
    }
}
