//! Prompt composer — builds the system prompt for one turn.
//!
//! Blocks are appended in a fixed order: persona, mood, primary topic module,
//! live search, crisis directive, user context, scriptures. The result is a
//! pure function of the arguments.

use std::fmt;

use crate::guide::crisis::CrisisLevel;
use crate::guide::mood::mood_config;
use crate::guide::prompts::{crisis_directive, topic_module, LIVE_SEARCH_BLOCK, PERSONA_PROMPT};
use crate::models::conversation::ConversationMeta;
use crate::models::scripture::ScriptureSnippet;
use crate::models::user::UserProfile;

const BLOCK_SEPARATOR: &str = "\n\n";

/// The composed instruction string handed to the model. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPrompt(String);

impl SystemPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SystemPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn build_system_prompt(
    user: &UserProfile,
    conversation: &ConversationMeta,
    scriptures: &[ScriptureSnippet],
    crisis_level: CrisisLevel,
    live_info_enabled: bool,
) -> SystemPrompt {
    let mut prompt = String::from(PERSONA_PROMPT);

    if let Some(mood) = conversation.mood() {
        let config = mood_config(mood);
        push_block(
            &mut prompt,
            &format!(
                "CURRENT MOOD CONTEXT: {}\nTone: {}\nApproach: {}",
                mood.as_str().to_uppercase(),
                config.tone,
                config.approach
            ),
        );
    }

    // Only the primary topic's module, never every detected topic.
    if let Some(module) = conversation.topic().and_then(topic_module) {
        push_block(&mut prompt, module);
    }

    if live_info_enabled {
        push_block(&mut prompt, LIVE_SEARCH_BLOCK);
    }

    if let Some(directive) = crisis_directive(crisis_level) {
        push_block(&mut prompt, &directive);
    }

    push_block(&mut prompt, &user_context_block(user));

    if !scriptures.is_empty() {
        push_block(&mut prompt, &scripture_block(scriptures));
    }

    SystemPrompt(prompt)
}

fn push_block(prompt: &mut String, block: &str) {
    prompt.push_str(BLOCK_SEPARATOR);
    prompt.push_str(block);
}

fn user_context_block(user: &UserProfile) -> String {
    format!(
        "USER CONTEXT:\n\
        - Name: {}\n\
        - Preferred Bible Version: {}\n\
        - Faith Background: {}\n\
        - Include Deuterocanonical Books: {}\n\
        - Current Streak: {} days",
        user.name_or_default(),
        user.bible_version_or_default(),
        user.denomination_or_default(),
        if user.include_apocrypha { "Yes" } else { "No" },
        user.current_streak
    )
}

fn scripture_block(scriptures: &[ScriptureSnippet]) -> String {
    let lines = scriptures
        .iter()
        .map(|s| format!("- {}: \"{}\"", s.reference, s.text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "RELEVANT SCRIPTURES FOR THIS CONVERSATION:\n{lines}\n\n\
        Note: Use these scriptures thoughtfully. You don't need to quote all of them.\n\
        Choose whichever fits this situation best."
    )
}
