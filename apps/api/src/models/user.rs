use serde::{Deserialize, Serialize};

use crate::models::scripture::Translation;

/// The slice of a user's profile the guide reads when composing a prompt.
/// Every field is optional on the wire; missing values fall back to the
/// defaults shown in the user-context block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub display_name: Option<String>,
    pub preferred_bible_version: Option<String>,
    pub denomination: Option<String>,
    pub include_apocrypha: bool,
    pub current_streak: u32,
}

impl UserProfile {
    pub fn name_or_default(&self) -> &str {
        non_empty(self.display_name.as_deref()).unwrap_or("Friend")
    }

    pub fn bible_version_or_default(&self) -> &str {
        non_empty(self.preferred_bible_version.as_deref()).unwrap_or(Translation::default().code())
    }

    pub fn denomination_or_default(&self) -> &str {
        non_empty(self.denomination.as_deref()).unwrap_or("Not specified")
    }

    /// Translation used for scripture retrieval. Unknown codes read as ESV.
    pub fn translation(&self) -> Translation {
        self.preferred_bible_version
            .as_deref()
            .and_then(Translation::parse)
            .unwrap_or_default()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
