//! Slash-command parsing and execution.
//!
//! This module turns a line typed at the prompt into GroupMe calls and console
//! output.
//!
//! # Architecture
//!
//! ```text
//! Input line
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← Entry point: parse() + execute()
//! └─────────────┘
//!      │
//!      ├── parse() ───────────── ordered pattern table ──► Vec<Command>
//!      │
//!      └── execute() ─────────┐
//!                             ▼
//!                  ┌─────────────────────┐
//!                  │ Action Handlers     │
//!                  │  - handle_help      │
//!                  │  - handle_groups    │
//!                  │  - handle_users     │
//!                  │  - handle_msg(all)  │
//!                  │  - handle_messages  │
//!                  │  - handle_like      │
//!                  │  - handle_botsay    │
//!                  │  - handle_readd     │
//!                  │  - handle_dm        │
//!                  │  - handle_(dm)spam  │
//!                  └─────────────────────┘
//!                             │
//!                             ▼
//!                  ┌────────────────────┐
//!                  │  CommandResult     │
//!                  │  - console text    │
//!                  └────────────────────┘
//! ```
//!
//! # Available Commands
//!
//! | Command | Arguments | Description |
//! |---------|-----------|-------------|
//! | `/help` | None | Display help information |
//! | `/groups` | None | List available groups |
//! | `/users` | `[group_id]` | List members of a group, or every known member |
//! | `/msg` | `<group_id> <text>` | Send a message to a group |
//! | `/msgall` | `<text>` | Send a message to every group |
//! | `/messages` | `<group_id>` | Show the latest messages of a group |
//! | `/like` | `<group_id> <message_id>` | Like the newest message of a group |
//! | `/botsay` | `<bot_name> <group_id> <text>` | Send a message from a transient bot |
//! | `/readd` | `<group_id>` | Remove and re-add every member |
//! | `/dm` | `<user_id> <text>` | Send a direct message |
//! | `/dmspam` | `<user_id> <n> [text]` | Repeat a direct message |
//! | `/spam` | `<group_id> <n> [text]` | Repeat a group message |
//!
//! Patterns are not exclusive: a line matching several of them runs every
//! matching command, in table order. Lines matching nothing are ignored.
//!
//! # Module Organization
//!
//! - [`commander`] - Parses lines and routes commands to handlers
//! - [`command`] - Command enum and the ordered pattern table
//! - [`actions`] - Individual command handlers
//! - [`lookup`] - Group and member resolution by id
//! - [`console_response`] - Console output formatting

use crate::{config::Config, groupme::Requester, smiley::SmileySource};

mod actions;
mod command;
mod commander;
mod console_response;
mod lookup;

pub use crate::commands::commander::Commander;

/// Everything a handler needs to run a command.
///
/// The collaborators are generic so handlers can run against mocks.
pub struct CommandContext<R: Requester, S: SmileySource> {
    /// GroupMe client
    pub requester: R,
    /// Random smiley source for spam without text
    pub smileys: S,
    /// Immutable client configuration
    pub config: Config,
}

/// Console output of a command.
///
/// An empty response means the command ran silently.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Text printed to the console
    pub response: String,
}

impl CommandResult {
    /// Creates a result printing `response`.
    pub fn new(response: String) -> Self {
        CommandResult { response }
    }

    /// Creates a result printing nothing.
    pub fn silent() -> Self {
        CommandResult::default()
    }

    /// Whether there is nothing to print.
    pub fn is_silent(&self) -> bool {
        self.response.is_empty()
    }
}
