//! chanwatch engine - application context for the channel monitor
//!
//! Owns the primary and secondary keyword stores and exposes the two entry
//! points a chat transport needs: adding keywords from a command and
//! turning a channel post into a notification.

pub mod commands;
pub mod config;
pub mod monitor;
pub mod replies;

pub use commands::{command_store, parse_command_args};
pub use config::MonitorConfig;
pub use monitor::Monitor;
