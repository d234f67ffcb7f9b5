//! Message translation.
//!
//! Validation messages may be literal strings or dotted translation keys
//! (`validation.sample.nameRequired`). Keys are resolved against a catalog
//! for the request's language; everything else passes through verbatim.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Issue;
use crate::schema::RawIssue;

/// Supported response languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }

    /// Parse a language tag, accepting region subtags (`tr-TR` -> `Tr`).
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        match primary.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "tr" => Some(Self::Tr),
            _ => None,
        }
    }
}

/// Resolves translation keys to localized strings.
///
/// Returns `None` when the key has no entry for the language; callers fall
/// back to the key text itself.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str, lang: Language) -> Option<String>;
}

/// One-or-more word-character segments joined by dots. Literal sentences do
/// not match; namespaced keys do. A literal that happens to match is treated
/// as a key (accepted approximation).
static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+(\.\w+)+$").expect("valid key pattern"));

/// Whether a raw message should be looked up in the catalog.
pub fn is_translation_key(message: &str) -> bool {
    KEY_PATTERN.is_match(message)
}

/// Resolve a raw message: translate key-shaped messages, falling back to the
/// key text on a catalog miss; return literals unchanged.
pub fn resolve_message(message: &str, lang: Language, translator: &dyn Translator) -> String {
    if is_translation_key(message) {
        translator
            .translate(message, lang)
            .unwrap_or_else(|| message.to_string())
    } else {
        message.to_string()
    }
}

/// Translate one raw validation issue into its user-facing form.
pub fn translate_issue(raw: &RawIssue, lang: Language, translator: &dyn Translator) -> Issue {
    let field = if raw.path.is_empty() {
        None
    } else {
        Some(raw.path.join("."))
    };

    Issue {
        field,
        detail: resolve_message(&raw.message, lang, translator),
    }
}

/// Translate an ordered list of raw issues, preserving order.
pub fn translate_issues(
    raw: &[RawIssue],
    lang: Language,
    translator: &dyn Translator,
) -> Vec<Issue> {
    raw.iter()
        .map(|issue| translate_issue(issue, lang, translator))
        .collect()
}
