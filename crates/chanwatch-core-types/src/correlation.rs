//! Correlation types for request tracking
//!
//! Every update handed to the monitor (a channel post or a chat command)
//! gets its own `RequestId` so its log lines and errors can be tied together.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single handled update
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (e.g. a Telegram update id)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried through one update's handling
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
    /// Where the update came from (`"channel_post"` or `"command"`)
    pub source: &'static str,
}

impl RequestContext {
    /// Create a new context with a fresh RequestId
    pub fn new(source: &'static str) -> Self {
        Self {
            request_id: RequestId::new(),
            source,
        }
    }
}
