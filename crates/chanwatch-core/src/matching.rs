//! Keyword matching
//!
//! Pure substring containment: a keyword matches when any of its triggers
//! occurs verbatim (case-sensitive) somewhere in the post text.

use crate::model::KeywordMap;

/// Keywords from `keywords` with at least one trigger contained in `text`.
///
/// Result order is the map's insertion order. An empty trigger is contained
/// in every string, so a keyword owning one matches every post.
pub fn find_matches(text: &str, keywords: &KeywordMap) -> Vec<String> {
    keywords
        .iter()
        .filter(|(_, triggers)| triggers.iter().any(|t| text.contains(t.as_str())))
        .map(|(keyword, _)| keyword.to_string())
        .collect()
}
