//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Field keys the test capture layer reads back
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_STORE: &str = "store";
pub const FIELD_KEYWORD: &str = "keyword";
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_CAUSE: &str = "err.cause";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_DEGRADED: &str = "degraded";
