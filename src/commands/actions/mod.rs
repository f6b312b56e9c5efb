//! Command action handlers.
//!
//! Individual handler functions for each prompt command. Each handler receives
//! a [`CommandContext`](crate::commands::CommandContext), performs at most a
//! few GroupMe calls, and returns a [`CommandResult`](crate::commands::CommandResult)
//! holding the console text.
//!
//! # Handler Pattern
//!
//! Handlers follow a consistent pattern:
//! 1. Resolve the target group or user, fetching it again from the service
//! 2. Print a diagnostic and stop when the target does not exist
//! 3. Perform the calls and return the text to print
//!
//! Transport errors are returned as is; nothing is retried.

mod botsay;
mod dm;
mod groups;
mod help;
mod messages;
mod msg;
mod readd;
mod spam;
mod users;

pub use crate::commands::actions::{
    botsay::handle_botsay,
    dm::handle_dm,
    groups::handle_groups,
    help::handle_help,
    messages::{handle_like, handle_messages},
    msg::{handle_msg, handle_msgall},
    readd::handle_readd,
    spam::{handle_dmspam, handle_spam},
    users::handle_users,
};
