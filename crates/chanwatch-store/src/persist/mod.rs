//! On-disk representation of keyword stores
//!
//! One JSON object per store: keyword → array of trigger strings.

mod atomic;
mod json_file;

pub use atomic::atomic_write;
pub use json_file::{read_keyword_file, write_keyword_file};
