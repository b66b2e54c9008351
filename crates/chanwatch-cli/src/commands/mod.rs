//! CLI command implementations

pub mod keyword;
pub mod post;
