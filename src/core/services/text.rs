//! Text utilities shared by the scorer, the suggestion generator and the
//! tag/description builders.

use std::sync::LazyLock;

use regex::Regex;

/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Shorten `text` to at most `max_len` chars without cutting a word in half.
///
/// Text within budget is returned trimmed but otherwise unchanged. Otherwise
/// the first `max_len - 3` chars are kept, backed up to the last interior
/// space unless the cut already falls on a word boundary, and `...` is
/// appended. With no interior space the cut is hard. Budgets of 3 or less
/// hard-cut without a marker.
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> String {
    let text = text.trim();
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_len {
        return text.to_string();
    }
    if max_len <= ELLIPSIS.len() {
        return chars[..max_len].iter().collect();
    }

    let keep = max_len - ELLIPSIS.len();
    let head: String = chars[..keep].iter().collect();
    let on_boundary = chars[keep].is_whitespace();

    let cut = if on_boundary {
        head.as_str()
    } else {
        match head.rfind(char::is_whitespace) {
            Some(pos) if pos > 0 => &head[..pos],
            _ => head.as_str(),
        }
    };

    format!("{}{ELLIPSIS}", cut.trim_end())
}

/// Capitalize the first letter of every word and lowercase the rest.
///
/// Apostrophes do not start a new word, so "don't" becomes "Don't".
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = c != '\'' && c != '’';
        }
    }
    out
}

/// Collapse whitespace runs into single spaces and trim the ends
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip separator punctuation and whitespace from both ends.
///
/// Brackets, quotes, `!` and `?` are kept since they belong to the text.
#[must_use]
pub fn strip_separators(text: &str) -> &str {
    text.trim_matches(|c: char| {
        c.is_whitespace()
            || matches!(c, '-' | '–' | '—' | '|' | ':' | ',' | ';' | '.' | '/' | '\\' | '•' | '·' | '~')
    })
}

/// Lowercase word tokens with punctuation removed.
///
/// Punctuation is deleted rather than used as a separator, so "don't"
/// yields "dont".
#[must_use]
pub fn clean_tokens(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// All decimal digit runs, in order of appearance
#[must_use]
pub fn digit_runs(text: &str) -> Vec<&str> {
    DIGIT_RUN.find_iter(text).map(|m| m.as_str()).collect()
}

/// True when the text has at least one cased letter and no lowercase letter
#[must_use]
pub fn is_all_caps(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// Remove every case-insensitive occurrence of `needle` from `text`
#[must_use]
pub fn remove_case_insensitive(text: &str, needle: &str) -> String {
    if needle.is_empty() {
        return text.to_string();
    }
    match Regex::new(&format!("(?i){}", regex::escape(needle))) {
        Ok(re) => re.replace_all(text, "").into_owned(),
        Err(_) => text.to_string(),
    }
}

/// Number of chars (Unicode scalar values) in `text`
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
