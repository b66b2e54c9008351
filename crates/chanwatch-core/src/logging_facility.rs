//! Logging for the monitor and its keyword stores
//!
//! `init` installs the process subscriber from the configured [`Profile`].
//! Store operations log through `log_store_start!`, `log_store_end!` and
//! `log_store_error!`, which always carry the `store` field. Tests install
//! [`init_test_capture`] instead and assert on the recorded events.
//!
//! ```rust
//! use chanwatch_core::logging_facility::{init, Profile};
//!
//! init(Profile::Production);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
