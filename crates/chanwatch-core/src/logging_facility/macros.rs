//! Store operation logging macros
//!
//! Every event names the store it touched, so a line from the primary
//! store can never be mistaken for one from the secondary store.

/// Log the start of a store operation
///
/// # Example
///
/// ```
/// # use chanwatch_core::{log_store_start, StoreKind};
/// log_store_start!("store_add", StoreKind::Primary);
/// log_store_start!("store_add", StoreKind::Secondary, keyword = "urgent");
/// ```
#[macro_export]
macro_rules! log_store_start {
    ($op:expr, $store:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = chanwatch_core_types::schema::EVENT_START,
            store = $crate::StoreKind::as_str(&$store),
        );
    };
    ($op:expr, $store:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = chanwatch_core_types::schema::EVENT_START,
            store = $crate::StoreKind::as_str(&$store),
            $($field)*
        );
    };
}

/// Log the successful end of a store operation
///
/// # Example
///
/// ```
/// # use chanwatch_core::{log_store_end, StoreKind};
/// log_store_end!("store_add", StoreKind::Primary, duration_ms = 3, created = true);
/// ```
#[macro_export]
macro_rules! log_store_end {
    ($op:expr, $store:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = chanwatch_core_types::schema::EVENT_END,
            store = $crate::StoreKind::as_str(&$store),
            duration_ms = $duration,
        );
    };
    ($op:expr, $store:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = chanwatch_core_types::schema::EVENT_END,
            store = $crate::StoreKind::as_str(&$store),
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log a failed store operation
///
/// Accepts anything convertible into `ExError`. The keyword and the code of
/// the underlying cause are taken from the error when present.
///
/// # Example
///
/// ```
/// # use chanwatch_core::{log_store_error, errors::ChanwatchError, StoreKind};
/// log_store_error!("store_add", StoreKind::Primary, ChanwatchError::EmptyKeyword, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_store_error {
    ($op:expr, $store:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = chanwatch_core_types::schema::EVENT_END_ERROR,
            store = $crate::StoreKind::as_str(&$store),
            duration_ms = $duration,
            keyword = ex_err.keyword(),
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            err.cause = ex_err.source_error().map($crate::errors::ExError::code),
            err.message = %ex_err,
        );
    }};
}
