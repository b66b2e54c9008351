//! Persisted keyword store
//!
//! A `KeywordStore` owns one keyword map and the file backing it. The
//! primary and secondary stores are two instances of this type.
//!
//! Loading never fails: a missing, unreadable or malformed file yields an
//! empty store and a `degraded` log event. Every successful `add` rewrites
//! the whole file before returning.

#![allow(clippy::result_large_err)]

use chanwatch_core::errors::{ChanwatchError, ExError};
use chanwatch_core::{log_store_end, log_store_error, log_store_start};
use chanwatch_core::{InsertReport, KeywordMap, StoreKind};
use chanwatch_core_types::schema::EVENT_DEGRADED;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::errors::Result;
use crate::persist::{read_keyword_file, write_keyword_file};

/// Result of a successful [`KeywordStore::add`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub keyword: String,
    /// The keyword was not in the store before this call
    pub created: bool,
    /// Triggers that were new to the keyword's set
    pub added: Vec<String>,
}

impl AddOutcome {
    fn from_report(keyword: &str, report: InsertReport) -> Self {
        Self {
            keyword: keyword.to_string(),
            created: report.created,
            added: report.added,
        }
    }
}

/// One keyword → trigger-set mapping plus its backing file
#[derive(Debug, Clone)]
pub struct KeywordStore {
    kind: StoreKind,
    path: PathBuf,
    keywords: KeywordMap,
}

impl KeywordStore {
    /// Load the store from `path`, degrading to an empty map on any read error.
    pub fn load(kind: StoreKind, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let keywords = match read_keyword_file(&path) {
            Ok(Some(keywords)) => {
                tracing::info!(
                    op = "store_load",
                    store = kind.as_str(),
                    path = %path.display(),
                    keyword_count = keywords.len(),
                    trigger_count = keywords.trigger_count(),
                    "Keyword store loaded"
                );
                keywords
            }
            Ok(None) => {
                tracing::info!(
                    op = "store_load",
                    store = kind.as_str(),
                    path = %path.display(),
                    "Keyword file not found, starting with an empty store"
                );
                KeywordMap::new()
            }
            Err(err) => {
                tracing::warn!(
                    op = "store_load",
                    event = EVENT_DEGRADED,
                    store = kind.as_str(),
                    path = %path.display(),
                    err.kind = ?err.kind(),
                    err.code = err.code(),
                    "Keyword file unusable, starting with an empty store: {}",
                    err
                );
                KeywordMap::new()
            }
        };

        Self {
            kind,
            path,
            keywords,
        }
    }

    /// Build a store from an in-memory map without touching disk.
    pub fn with_keywords(kind: StoreKind, path: impl Into<PathBuf>, keywords: KeywordMap) -> Self {
        Self {
            kind,
            path: path.into(),
            keywords,
        }
    }

    pub fn kind(&self) -> StoreKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn keywords(&self) -> &KeywordMap {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Add `keyword` (if absent) and union `triggers` into its set, then save.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for an empty/whitespace keyword or an empty
    ///   trigger; nothing is changed.
    /// - Storage errors from [`save`](Self::save); the in-memory change is
    ///   rolled back so memory matches the file.
    pub fn add(&mut self, keyword: &str, triggers: &[String]) -> Result<AddOutcome> {
        let start = Instant::now();
        log_store_start!(
            "store_add",
            self.kind,
            keyword = keyword,
            trigger_count = triggers.len()
        );

        if let Err(err) = validate(keyword, triggers) {
            let err = ExError::from(err).with_store(self.kind);
            log_store_error!(
                "store_add",
                self.kind,
                err.clone(),
                duration_ms = elapsed_ms(start)
            );
            return Err(err);
        }

        let report = self
            .keywords
            .insert_triggers(keyword, triggers.iter().cloned());

        if let Err(err) = self.save() {
            self.keywords.revert(keyword, &report);
            let err = err.with_keyword(keyword);
            log_store_error!(
                "store_add",
                self.kind,
                err.clone(),
                duration_ms = elapsed_ms(start)
            );
            return Err(err);
        }

        log_store_end!(
            "store_add",
            self.kind,
            duration_ms = elapsed_ms(start),
            created = report.created,
            added = report.added.len()
        );
        Ok(AddOutcome::from_report(keyword, report))
    }

    /// Write the full map to the backing file, replacing it atomically.
    ///
    /// # Errors
    ///
    /// `Persistence` when the file could not be replaced; the filesystem or
    /// encoding failure is attached as the error's source.
    pub fn save(&self) -> Result<()> {
        let start = Instant::now();
        match write_keyword_file(&self.path, &self.keywords) {
            Ok(()) => {
                tracing::debug!(
                    op = "store_save",
                    store = self.kind.as_str(),
                    path = %self.path.display(),
                    keyword_count = self.keywords.len(),
                    duration_ms = elapsed_ms(start),
                    "Keyword store saved"
                );
                Ok(())
            }
            Err(cause) => Err(ExError::from(ChanwatchError::StoreWrite {
                store: self.kind,
                path: self.path.display().to_string(),
                message: "keyword file was not replaced".to_string(),
            })
            .with_source(cause)),
        }
    }

    /// Re-read the backing file, replacing the in-memory map.
    ///
    /// Same degrade-to-empty policy as [`load`](Self::load).
    pub fn reload(&mut self) {
        let fresh = Self::load(self.kind, self.path.clone());
        self.keywords = fresh.keywords;
    }
}

fn validate(keyword: &str, triggers: &[String]) -> std::result::Result<(), ChanwatchError> {
    if keyword.trim().is_empty() {
        return Err(ChanwatchError::EmptyKeyword);
    }
    if triggers.iter().any(String::is_empty) {
        return Err(ChanwatchError::EmptyTrigger {
            keyword: keyword.to_string(),
        });
    }
    Ok(())
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chanwatch_core::ExErrorKind;
    use std::fs;
    use tempfile::TempDir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = KeywordStore::load(StoreKind::Primary, dir.path().join("absent.json"));

        assert!(store.is_empty());
        assert_eq!(store.kind(), StoreKind::Primary);
    }

    #[test]
    fn test_add_persists_before_returning() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keywords.json");
        let mut store = KeywordStore::load(StoreKind::Primary, &path);

        let outcome = store.add("sale", &strings(&["discount"])).unwrap();
        assert!(outcome.created);
        assert_eq!(outcome.added, vec!["discount"]);

        let on_disk = read_keyword_file(&path).unwrap().unwrap();
        assert_eq!(&on_disk, store.keywords());
    }

    #[test]
    fn test_add_without_triggers_creates_key() {
        let dir = TempDir::new().unwrap();
        let mut store = KeywordStore::load(StoreKind::Secondary, dir.path().join("k.json"));

        let outcome = store.add("later", &[]).unwrap();
        assert!(outcome.created);
        assert!(outcome.added.is_empty());
        assert!(store.keywords().get("later").unwrap().is_empty());
    }

    #[test]
    fn test_empty_keyword_rejected_without_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("k.json");
        let mut store = KeywordStore::load(StoreKind::Primary, &path);

        let err = store.add("  ", &strings(&["x"])).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidArgument);
        assert_eq!(err.store(), Some(StoreKind::Primary));
        assert!(store.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_empty_trigger_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = KeywordStore::load(StoreKind::Primary, dir.path().join("k.json"));

        let err = store.add("sale", &strings(&["discount", ""])).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidArgument);
        assert_eq!(err.keyword(), Some("sale"));
        assert!(!store.keywords().contains("sale"));
    }

    #[test]
    fn test_write_failure_rolls_back() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"file").unwrap();

        let mut store = KeywordStore::with_keywords(
            StoreKind::Primary,
            blocker.join("k.json"),
            KeywordMap::from_iter([("sale", ["discount"])]),
        );
        let before = store.keywords().clone();

        assert!(store.add("sale", &strings(&["promo"])).is_err());
        assert!(store.add("new", &strings(&["x"])).is_err());
        assert_eq!(store.keywords(), &before);
    }

    #[test]
    fn test_save_failure_is_persistence_with_io_cause() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"file").unwrap();

        let store = KeywordStore::with_keywords(
            StoreKind::Secondary,
            blocker.join("k.json"),
            KeywordMap::new(),
        );
        let err = store.save().unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::Persistence);
        assert_eq!(err.op(), Some("store_save"));
        assert_eq!(err.store(), Some(StoreKind::Secondary));
        let cause = err.source_error().unwrap();
        assert_eq!(cause.kind(), ExErrorKind::Io);
        assert_eq!(cause.op(), Some("create_store_dir"));
        assert!(err.to_string().contains("caused by [ERR_IO]"));
    }

    #[test]
    fn test_reload_picks_up_external_edit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("k.json");
        let mut store = KeywordStore::load(StoreKind::Primary, &path);
        store.add("a", &strings(&["1"])).unwrap();

        fs::write(&path, br#"{"b": ["2"]}"#).unwrap();
        store.reload();

        assert!(!store.keywords().contains("a"));
        assert!(store.keywords().contains("b"));
    }
}
