//! Notification text for the target chat
//!
//! Format: `<primary keywords> : <secondary keywords>\n<link>`, keywords
//! space-joined. The separator stays even when one side is empty, so
//! consumers can always split on `" : "`.

use crate::matching::find_matches;
use crate::model::KeywordMap;

pub const GROUP_SEPARATOR: &str = " : ";

/// Match results for one post, kept per store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostMatches {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
}

impl PostMatches {
    /// Run matching against both stores
    pub fn evaluate(text: &str, primary: &KeywordMap, secondary: &KeywordMap) -> Self {
        Self {
            primary: find_matches(text, primary),
            secondary: find_matches(text, secondary),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    pub fn notification(&self, link: &str) -> Option<String> {
        format_notification(&self.primary, &self.secondary, link)
    }
}

/// Build the notification text, or `None` when nothing matched
pub fn format_notification<P, S>(primary: &[P], secondary: &[S], link: &str) -> Option<String>
where
    P: AsRef<str>,
    S: AsRef<str>,
{
    if primary.is_empty() && secondary.is_empty() {
        return None;
    }
    Some(format!(
        "{}{}{}\n{}",
        join(primary),
        GROUP_SEPARATOR,
        join(secondary),
        link
    ))
}

fn join<T: AsRef<str>>(items: &[T]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINK: &str = "https://t.me/c/123/456";

    #[test]
    fn test_both_groups() {
        let text = format_notification(&["sale", "promo"], &["urgent"], LINK);
        assert_eq!(
            text.as_deref(),
            Some("sale promo : urgent\nhttps://t.me/c/123/456")
        );
    }

    #[test]
    fn test_only_primary_keeps_trailing_separator() {
        let text = format_notification(&["sale"], &[] as &[&str], LINK);
        assert_eq!(text.as_deref(), Some("sale : \nhttps://t.me/c/123/456"));
    }

    #[test]
    fn test_only_secondary_keeps_leading_space() {
        let text = format_notification(&[] as &[&str], &["urgent"], LINK);
        assert_eq!(text.as_deref(), Some(" : urgent\nhttps://t.me/c/123/456"));
    }

    #[test]
    fn test_nothing_matched() {
        assert_eq!(format_notification::<&str, &str>(&[], &[], LINK), None);
    }

    #[test]
    fn test_post_matches_evaluate() {
        let primary = KeywordMap::from_iter([("sale", ["discount"])]);
        let secondary = KeywordMap::from_iter([("urgent", ["now"])]);

        let matches = PostMatches::evaluate("Big discount now available", &primary, &secondary);
        assert_eq!(matches.primary, vec!["sale"]);
        assert_eq!(matches.secondary, vec!["urgent"]);
        assert_eq!(
            matches.notification(LINK).as_deref(),
            Some("sale : urgent\nhttps://t.me/c/123/456")
        );
    }
}
