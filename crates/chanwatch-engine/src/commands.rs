//! Chat command helpers for transports that only see raw message text

use chanwatch_core::StoreKind;

pub const ADD_KEYWORD: &str = "add_keyword";
pub const ADD_SECONDARY_KEYWORD: &str = "add_secondary_keyword";

/// Store targeted by a command name (without the leading `/`).
///
/// A `@botname` suffix is ignored.
pub fn command_store(command: &str) -> Option<StoreKind> {
    let name = command.trim_start_matches('/');
    let name = name.split('@').next().unwrap_or(name);
    match name {
        ADD_KEYWORD => Some(StoreKind::Primary),
        ADD_SECONDARY_KEYWORD => Some(StoreKind::Secondary),
        _ => None,
    }
}

/// Arguments of a command message: the leading `/command` token is dropped
/// and the rest is split on whitespace.
pub fn parse_command_args(text: &str) -> Vec<String> {
    text.split_whitespace().skip(1).map(str::to_string).collect()
}
