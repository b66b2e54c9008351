//! chanwatch store - durable keyword stores
//!
//! Provides:
//! - Atomic temp→rename file writes
//! - JSON (de)serialization of keyword maps
//! - `KeywordStore`: one persisted keyword map (primary or secondary)

pub mod errors;
pub mod keyword_store;
pub mod persist;

// Re-export key types
pub use errors::Result;
pub use keyword_store::{AddOutcome, KeywordStore};
