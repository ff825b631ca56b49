//! Tag generation
//!
//! Builds an upload tag list from the keyword, the title's words and
//! trending competitor tags.

use crate::core::models::ReferenceData;

use super::text::{char_len, clean_tokens};

/// Maximum number of tags returned
pub const MAX_TAGS: usize = 20;

/// Title words stop being added once the list reaches this size
const TITLE_WORDS_UNTIL: usize = 10;
/// Trending tags stop being added once the list reaches this size
const TRENDING_UNTIL: usize = 15;
/// Only the first few trending tags are considered
const TRENDING_CONSIDERED: usize = 5;
/// Title words must be longer than this
const MIN_WORD_LEN: usize = 2;

/// Insertion-ordered tag list that ignores case-insensitive duplicates
#[derive(Debug, Default)]
struct TagList {
    tags: Vec<String>,
}

impl TagList {
    fn push(&mut self, tag: &str) {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    fn len(&self) -> usize {
        self.tags.len()
    }

    fn into_vec(mut self) -> Vec<String> {
        self.tags.truncate(MAX_TAGS);
        self.tags
    }
}

/// Generate lowercase tags for an upload.
///
/// Order: keyword, title words (alphanumeric, longer than 2 chars, not stop
/// words), up to 5 trending tags, then "keyword year" and "keyword tutorial".
/// Duplicates are dropped case-insensitively and the list is capped at
/// [`MAX_TAGS`].
#[must_use]
pub fn generate_tags(
    title: &str,
    keyword: &str,
    trending: &[String],
    reference: &ReferenceData,
    year: i32,
) -> Vec<String> {
    let keyword = keyword.trim().to_lowercase();
    let mut tags = TagList::default();
    tags.push(&keyword);

    for word in clean_tokens(title) {
        if tags.len() >= TITLE_WORDS_UNTIL {
            break;
        }
        if char_len(&word) > MIN_WORD_LEN && !reference.is_stop_word(&word) {
            tags.push(&word);
        }
    }

    for tag in trending.iter().take(TRENDING_CONSIDERED) {
        if tags.len() >= TRENDING_UNTIL {
            break;
        }
        tags.push(tag);
    }

    if !keyword.is_empty() {
        tags.push(&format!("{keyword} {year}"));
        tags.push(&format!("{keyword} tutorial"));
    }

    tags.into_vec()
}
