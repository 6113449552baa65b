use serde::{Deserialize, Serialize};

/// A scripture passage handed to the prompt composer. Retrieved by the caller,
/// never fetched by the guide itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptureSnippet {
    pub reference: String,
    pub text: String,
}

/// Bible translations the scripture store carries a text column for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Translation {
    #[default]
    Esv,
    Niv,
    Kjv,
    Nasb,
    Nlt,
}

impl Translation {
    pub const ALL: [Translation; 5] = [
        Translation::Esv,
        Translation::Niv,
        Translation::Kjv,
        Translation::Nasb,
        Translation::Nlt,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Translation::Esv => "ESV",
            Translation::Niv => "NIV",
            Translation::Kjv => "KJV",
            Translation::Nasb => "NASB",
            Translation::Nlt => "NLT",
        }
    }

    /// Column in `scripture_verses` holding this translation's text.
    /// Always one of a fixed set, so it is safe to splice into SQL.
    pub fn column(self) -> &'static str {
        match self {
            Translation::Esv => "text_esv",
            Translation::Niv => "text_niv",
            Translation::Kjv => "text_kjv",
            Translation::Nasb => "text_nasb",
            Translation::Nlt => "text_nlt",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Translation::parse("kjv"), Some(Translation::Kjv));
        assert_eq!(Translation::parse(" Nasb "), Some(Translation::Nasb));
        assert_eq!(Translation::parse("MSG"), None);
    }

    #[test]
    fn test_every_column_is_prefixed() {
        for t in Translation::ALL {
            assert!(t.column().starts_with("text_"));
            assert!(t.column().ends_with(&t.code().to_lowercase()));
        }
    }
}
