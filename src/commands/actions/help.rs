//! Help command handler.
//!
//! This is a stateless command that always returns the same synopsis and
//! makes no network call.

use log::debug;

use crate::commands::{CommandResult, console_response::format_help};

/// Returns the synopsis of every available command.
pub fn handle_help() -> CommandResult {
    debug!("handling help command");

    CommandResult::new(format_help())
}
