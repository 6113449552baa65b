//! Shared text normalization for keyword matching.

/// Lowercases `text` and folds typographic apostrophes (U+2018, U+2019) into
/// `'`, so "Can’t" from a phone keyboard matches the keyword "can't".
pub fn normalize_utterance(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect()
}
