//! The monitor: application context owning both keyword stores
//!
//! Mutation takes `&mut self`, so a store's add+save can never interleave
//! with another write. A transport that handles updates in parallel has to
//! put the monitor behind a mutex.

#![allow(clippy::result_large_err)]

use chanwatch_core::errors::{ChanwatchError, ExError, Result};
use chanwatch_core::{PostMatches, StoreKind};
use chanwatch_core_types::RequestContext;
use chanwatch_store::KeywordStore;

use crate::config::StorageConfig;
use crate::replies;

pub struct Monitor {
    primary: KeywordStore,
    secondary: KeywordStore,
}

impl Monitor {
    /// Load both stores from their configured files.
    pub fn open(storage: &StorageConfig) -> Self {
        Self {
            primary: KeywordStore::load(StoreKind::Primary, storage.primary_path.clone()),
            secondary: KeywordStore::load(StoreKind::Secondary, storage.secondary_path.clone()),
        }
    }

    pub fn from_stores(primary: KeywordStore, secondary: KeywordStore) -> Self {
        Self { primary, secondary }
    }

    pub fn store(&self, kind: StoreKind) -> &KeywordStore {
        match kind {
            StoreKind::Primary => &self.primary,
            StoreKind::Secondary => &self.secondary,
        }
    }

    fn store_mut(&mut self, kind: StoreKind) -> &mut KeywordStore {
        match kind {
            StoreKind::Primary => &mut self.primary,
            StoreKind::Secondary => &mut self.secondary,
        }
    }

    /// Handle an add command: `raw_args[0]` is the keyword, the rest are
    /// trigger values. Returns the confirmation text once the store is saved.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `raw_args` is empty or contains an empty
    /// keyword/value; storage errors when the file could not be written.
    pub fn on_add_keyword(&mut self, store: StoreKind, raw_args: &[String]) -> Result<String> {
        let ctx = RequestContext::new("command");
        let span = tracing::info_span!(
            "add_keyword",
            request_id = %ctx.request_id,
            source = ctx.source,
            store = store.as_str()
        );
        let _guard = span.enter();

        let (keyword, values) = match raw_args.split_first() {
            Some((keyword, values)) => (keyword, values),
            None => {
                let err = ExError::from(ChanwatchError::MissingKeyword { store })
                    .with_request_id(ctx.request_id);
                tracing::warn!(err.code = err.code(), "Add command without arguments");
                return Err(err);
            }
        };

        self.store_mut(store)
            .add(keyword, values)
            .map_err(|e| e.with_request_id(ctx.request_id.clone()))?;

        Ok(replies::add_confirmation(store, keyword, values))
    }

    /// Match a post against both stores.
    pub fn evaluate(&self, text: &str) -> PostMatches {
        PostMatches::evaluate(text, self.primary.keywords(), self.secondary.keywords())
    }

    /// Notification text for a channel post, or `None` if nothing matched.
    pub fn on_channel_post(&self, text: &str, link: &str) -> Option<String> {
        let ctx = RequestContext::new("channel_post");
        let span = tracing::debug_span!(
            "channel_post",
            request_id = %ctx.request_id,
            source = ctx.source
        );
        let _guard = span.enter();

        let matches = self.evaluate(text);
        if matches.is_empty() {
            tracing::debug!(op = "match_post", "No keyword matched");
            return None;
        }

        tracing::info!(
            op = "match_post",
            primary_matches = matches.primary.len(),
            secondary_matches = matches.secondary.len(),
            link = link,
            "Post matched"
        );
        matches.notification(link)
    }

    /// Convenience for transports: run `on_add_keyword` and always produce
    /// a reply, turning failures into a user-facing message.
    pub fn reply_to_add_keyword(&mut self, store: StoreKind, raw_args: &[String]) -> String {
        match self.on_add_keyword(store, raw_args) {
            Ok(reply) => reply,
            Err(err) => replies::error_reply(store, &err),
        }
    }
}
