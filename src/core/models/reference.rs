//! Reference tables used by the scorer and the suggestion generator
//!
//! Built once at startup and passed by reference; a reload replaces the
//! whole value. Every table is non-empty by construction.

use serde::{Deserialize, Serialize};

/// Built-in power words, used whenever the remote list is unavailable
pub const FALLBACK_POWER_WORDS: &[&str] = &[
    "secret",
    "best",
    "exposed",
    "tutorial",
    "guide",
    "how to",
    "tips",
    "tricks",
    "hacks",
    "ultimate",
    "complete",
    "full",
    "master",
    "proven",
    "amazing",
    "incredible",
];

/// Emoji that tend to stand out in search results
pub const VIRAL_EMOJIS: &[&str] = &[
    "🔥", "😱", "🔴", "✅", "❌", "🎵", "⚠️", "⚡", "🚀", "💰", "💯", "🤯", "😭", "😡", "😴", "🌙",
    "✨", "💤", "🌧️", "🎹", "👀", "💪", "🎯", "⭐", "🏆",
];

/// Words ignored when extracting tags and themes
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "for", "to", "in", "on", "at", "by", "with", "a", "an", "is", "it", "of",
    "that", "this", "video", "i", "you", "me", "we",
];

/// Where the power-word table came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceOrigin {
    /// Fetched from the configured remote list
    Online,
    /// Built-in fallback table
    #[default]
    Builtin,
}

impl std::fmt::Display for ReferenceOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Builtin => write!(f, "builtin"),
        }
    }
}

/// Power words, viral emoji and stop words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    power_words: Vec<String>,
    viral_emojis: Vec<String>,
    stop_words: Vec<String>,
    origin: ReferenceOrigin,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceData {
    /// The built-in tables
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            power_words: to_owned(FALLBACK_POWER_WORDS),
            viral_emojis: to_owned(VIRAL_EMOJIS),
            stop_words: to_owned(STOP_WORDS),
            origin: ReferenceOrigin::Builtin,
        }
    }

    /// Build from explicit tables.
    ///
    /// Blank entries are dropped and duplicates collapsed (case-insensitively for
    /// words). A table left empty falls back to its built-in counterpart, and the
    /// origin is downgraded to `Builtin` if the power words had to fall back.
    #[must_use]
    pub fn new(
        power_words: Vec<String>,
        viral_emojis: Vec<String>,
        stop_words: Vec<String>,
        origin: ReferenceOrigin,
    ) -> Self {
        let power_words = normalize(power_words, true);
        let viral_emojis = normalize(viral_emojis, false);
        let stop_words = normalize(stop_words, true);

        let origin = if power_words.is_empty() {
            ReferenceOrigin::Builtin
        } else {
            origin
        };

        Self {
            power_words: or_fallback(power_words, FALLBACK_POWER_WORDS),
            viral_emojis: or_fallback(viral_emojis, VIRAL_EMOJIS),
            stop_words: or_fallback(stop_words, STOP_WORDS),
            origin,
        }
    }

    /// Built-in emoji and stop words with a remotely loaded power-word list
    #[must_use]
    pub fn with_power_words(power_words: Vec<String>) -> Self {
        Self::new(
            power_words,
            to_owned(VIRAL_EMOJIS),
            to_owned(STOP_WORDS),
            ReferenceOrigin::Online,
        )
    }

    /// Power words in table order
    #[must_use]
    pub fn power_words(&self) -> &[String] {
        &self.power_words
    }

    /// Viral emoji in table order
    #[must_use]
    pub fn viral_emojis(&self) -> &[String] {
        &self.viral_emojis
    }

    /// Stop words in table order
    #[must_use]
    pub fn stop_words(&self) -> &[String] {
        &self.stop_words
    }

    /// Where the power words came from
    #[must_use]
    pub const fn origin(&self) -> ReferenceOrigin {
        self.origin
    }

    /// Whether `word` is a stop word (expects lowercase input)
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.iter().any(|w| w == word)
    }

    /// Power words contained in `text`, case-insensitively, in table order
    #[must_use]
    pub fn power_words_in(&self, text: &str) -> Vec<&str> {
        let lower = text.to_lowercase();
        self.power_words
            .iter()
            .filter(|w| lower.contains(w.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Viral emoji contained in `text`, in table order
    #[must_use]
    pub fn emojis_in(&self, text: &str) -> Vec<&str> {
        self.viral_emojis
            .iter()
            .filter(|e| text.contains(e.as_str()))
            .map(String::as_str)
            .collect()
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn normalize(items: Vec<String>, lowercase: bool) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let trimmed = item.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = if lowercase {
            trimmed.to_lowercase()
        } else {
            trimmed.to_string()
        };
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

fn or_fallback(items: Vec<String>, fallback: &[&str]) -> Vec<String> {
    if items.is_empty() {
        to_owned(fallback)
    } else {
        items
    }
}
