use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

// Capitalized book name, optional leading numeral ("1 Corinthians"),
// chapter:verse and an optional verse range.
static REFERENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\d\s)?[A-Z][a-z]+\s+\d+:\d+(?:-\d+)?")
        .expect("scripture reference pattern is valid")
});

/// Scripture references cited in generated text, deduplicated in the order
/// they first appear.
pub fn extract_scripture_references(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    REFERENCE_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|reference| seen.insert(*reference))
        .map(str::to_string)
        .collect()
}
