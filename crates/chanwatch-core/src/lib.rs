//! chanwatch core - keyword model and matching kernel
//!
//! This crate provides the in-memory side of the channel monitor:
//! - Keyword → trigger-set model with insertion-ordered keywords
//! - Substring matching of post text against a keyword map
//! - Notification text formatting for the target chat
//! - Error and structured logging facilities shared by the other crates

pub mod errors;
pub mod logging_facility;
pub mod matching;
pub mod model;
pub mod notify;

// Re-export commonly used types
pub use errors::{ChanwatchError, ExError, ExErrorKind, Result};
pub use matching::find_matches;
pub use model::{InsertReport, KeywordEntry, KeywordMap, StoreKind};
pub use notify::{format_notification, PostMatches};
