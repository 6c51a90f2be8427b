//! Supported document languages and the source/target pair.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A language the translation service accepts.
///
/// Serialized as its wire code (`"hi"` or `"en"`), which is also the
/// value sent in the `source_lang` / `target_lang` form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Hindi (`hi`).
    #[serde(rename = "hi")]
    Hindi,
    /// English (`en`).
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// All languages in the order the pickers list them.
    pub const ALL: [Self; 2] = [Self::Hindi, Self::English];

    /// Two-letter code understood by the translation service.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Hindi => "hi",
            Self::English => "en",
        }
    }

    /// Label shown in the language pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hindi => "Hindi (हिंदी)",
            Self::English => "English",
        }
    }

    /// The other supported language.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Hindi => Self::English,
            Self::English => Self::Hindi,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is not a known language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {0:?} (expected \"hi\" or \"en\")")]
pub struct ParseLanguageError(String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ParseLanguageError(s.to_owned()))
    }
}

/// Source and target language of a translation.
///
/// No invariant is enforced here: the pickers may hold the same
/// language on both sides, and the form rejects that on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
    /// Language the uploaded document is written in.
    pub source: Language,
    /// Language the document should be translated into.
    pub target: Language,
}

impl LanguagePair {
    /// Create a pair.
    #[must_use]
    pub const fn new(source: Language, target: Language) -> Self {
        Self { source, target }
    }

    /// The pair with source and target exchanged.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    /// Whether source and target differ.
    #[must_use]
    pub fn is_distinct(self) -> bool {
        self.source != self.target
    }
}

impl Default for LanguagePair {
    /// Hindi to English.
    fn default() -> Self {
        Self::new(Language::Hindi, Language::English)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_str() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn from_str_is_case_insensitive_and_trims() {
        assert_eq!(" HI ".parse::<Language>().unwrap(), Language::Hindi);
        assert_eq!("En".parse::<Language>().unwrap(), Language::English);
    }

    #[test]
    fn from_str_rejects_unknown_code() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("\"fr\""), "got: {err}");
    }

    #[test]
    fn serde_uses_wire_codes() {
        assert_eq!(serde_json::to_string(&Language::Hindi).unwrap(), "\"hi\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Language::Hindi.to_string(), "Hindi (हिंदी)");
        assert_eq!(Language::English.to_string(), "English");
    }

    #[test]
    fn other_flips() {
        assert_eq!(Language::Hindi.other(), Language::English);
        assert_eq!(Language::English.other(), Language::Hindi);
    }

    #[test]
    fn default_pair_is_hindi_to_english() {
        let pair = LanguagePair::default();
        assert_eq!(pair.source, Language::Hindi);
        assert_eq!(pair.target, Language::English);
        assert!(pair.is_distinct());
    }

    #[test]
    fn swapped_twice_is_identity() {
        let pair = LanguagePair::new(Language::English, Language::Hindi);
        assert_eq!(pair.swapped().swapped(), pair);
        assert_eq!(pair.swapped(), LanguagePair::default());
    }

    #[test]
    fn same_language_pair_is_not_distinct() {
        assert!(!LanguagePair::new(Language::English, Language::English).is_distinct());
    }
}
