//! Keyword model
//!
//! A `KeywordMap` maps each keyword to the set of trigger substrings that
//! make it match. Keywords keep their insertion order (notifications list
//! them in that order); trigger sets are unordered and kept sorted.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::errors::ChanwatchError;

/// Which of the two independent keyword stores an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Primary,
    Secondary,
}

impl StoreKind {
    pub const ALL: [StoreKind; 2] = [StoreKind::Primary, StoreKind::Secondary];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Primary => "primary",
            StoreKind::Secondary => "secondary",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreKind {
    type Err = ChanwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(StoreKind::Primary),
            "secondary" => Ok(StoreKind::Secondary),
            other => Err(ChanwatchError::UnknownStore {
                name: other.to_string(),
            }),
        }
    }
}

/// One keyword and its trigger set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub keyword: String,
    pub triggers: BTreeSet<String>,
}

/// What a call to [`KeywordMap::insert_triggers`] changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertReport {
    /// The keyword did not exist before
    pub created: bool,
    /// Triggers that were not already in the set
    pub added: Vec<String>,
}

impl InsertReport {
    pub fn is_noop(&self) -> bool {
        !self.created && self.added.is_empty()
    }
}

/// Insertion-ordered keyword → trigger-set mapping
///
/// Persisted as a JSON object of arrays. Deserialization keeps the key
/// order of the document; a repeated key keeps its first position and
/// takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordMap {
    entries: Vec<KeywordEntry>,
    index: HashMap<String, usize>,
}

impl KeywordMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.index.contains_key(keyword)
    }

    /// Trigger set for a keyword
    pub fn get(&self, keyword: &str) -> Option<&BTreeSet<String>> {
        self.index.get(keyword).map(|&i| &self.entries[i].triggers)
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    /// `(keyword, triggers)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries
            .iter()
            .map(|e| (e.keyword.as_str(), &e.triggers))
    }

    /// Total number of triggers across all keywords
    pub fn trigger_count(&self) -> usize {
        self.entries.iter().map(|e| e.triggers.len()).sum()
    }

    /// Create `keyword` if absent, then union `triggers` into its set.
    ///
    /// No validation happens here; callers that accept user input go
    /// through the store, which rejects empty keywords and triggers.
    pub fn insert_triggers<I, S>(&mut self, keyword: &str, triggers: I) -> InsertReport
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut report = InsertReport::default();
        let idx = match self.index.get(keyword) {
            Some(&i) => i,
            None => {
                report.created = true;
                self.push_entry(keyword.to_string(), BTreeSet::new())
            }
        };

        let set = &mut self.entries[idx].triggers;
        for trigger in triggers {
            let trigger = trigger.into();
            if set.insert(trigger.clone()) {
                report.added.push(trigger);
            }
        }
        report
    }

    /// Undo a previous `insert_triggers` for the same keyword.
    ///
    /// Only valid if nothing else mutated the map in between.
    pub fn revert(&mut self, keyword: &str, report: &InsertReport) {
        if report.created {
            if self.entries.last().map(|e| e.keyword.as_str()) == Some(keyword) {
                self.entries.pop();
                self.index.remove(keyword);
            }
            return;
        }
        if let Some(&i) = self.index.get(keyword) {
            for trigger in &report.added {
                self.entries[i].triggers.remove(trigger);
            }
        }
    }

    fn push_entry(&mut self, keyword: String, triggers: BTreeSet<String>) -> usize {
        let idx = self.entries.len();
        self.index.insert(keyword.clone(), idx);
        self.entries.push(KeywordEntry { keyword, triggers });
        idx
    }

    fn replace_or_push(&mut self, keyword: String, triggers: BTreeSet<String>) {
        match self.index.get(&keyword) {
            Some(&i) => self.entries[i].triggers = triggers,
            None => {
                self.push_entry(keyword, triggers);
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for KeywordMap
where
    K: Into<String>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = KeywordMap::new();
        for (keyword, triggers) in iter {
            let triggers = triggers.into_iter().map(Into::into).collect();
            map.replace_or_push(keyword.into(), triggers);
        }
        map
    }
}

impl Serialize for KeywordMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.keyword, &entry.triggers)?;
        }
        map.end()
    }
}

struct KeywordMapVisitor;

impl<'de> Visitor<'de> for KeywordMapVisitor {
    type Value = KeywordMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping keywords to arrays of trigger strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<KeywordMap, A::Error> {
        let mut map = KeywordMap::new();
        while let Some((keyword, triggers)) = access.next_entry::<String, Vec<String>>()? {
            map.replace_or_push(keyword, triggers.into_iter().collect());
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for KeywordMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(KeywordMapVisitor)
    }
}
