//! GroupMe chat service integration.
//!
//! This module wraps the subset of the GroupMe v3 REST API the client needs:
//! listing groups and their members, posting and liking messages, direct
//! messages, transient bots, and membership changes.
//!
//! # Modules
//!
//! - `requester` - HTTP client and the mockable [`Requester`] trait
//! - `response_structs` - Envelopes wrapping API payloads
//! - `structs` - Groups, members, messages, bots and users
//!
//! # Examples
//!
//! ```no_run
//! use gmcli::groupme::{GroupMeRequester, Requester};
//!
//! let requester = GroupMeRequester::new("https://api.groupme.com/v3", "access_token");
//! let groups = requester.get_groups().await?;
//! ```

mod requester;
mod response_structs;
mod structs;

#[cfg(test)]
pub use crate::groupme::requester::MockRequester;
pub use crate::groupme::requester::{GroupMeRequester, Requester};
#[cfg(test)]
pub use crate::groupme::structs::{Bot, User};
pub use crate::groupme::structs::{Group, Member, Message};
