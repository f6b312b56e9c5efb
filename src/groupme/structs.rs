//! Data structures representing GroupMe entities.
//!
//! These are deserialized straight from the `response` payload of the GroupMe
//! v3 API and are never cached: every command fetches them again.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A chat group with its member roster.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Unique identifier of the group
    pub id: String,
    /// Display name of the group
    pub name: String,
    /// User id of the group creator
    #[serde(default)]
    pub creator_user_id: String,
    /// Current memberships of the group
    #[serde(default)]
    pub members: Vec<Member>,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id={}, name={}, creator_user_id={}, members={}",
            self.id,
            self.name,
            self.creator_user_id,
            self.members.len()
        )
    }
}

/// A user's membership in a specific group.
///
/// The same user shows up as a different `Member` in every group they belong
/// to, each with its own `membership_id`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Membership identifier, needed to remove the member from the group
    #[serde(rename = "id", default, skip_serializing)]
    pub membership_id: String,
    /// User identifier, stable across groups
    pub user_id: String,
    /// Name displayed in the group
    pub nickname: String,
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "membership_id={}, user_id={}, nickname={}",
            self.membership_id, self.user_id, self.nickname
        )
    }
}

/// A message posted in a group.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Unique identifier of the message
    pub id: String,
    /// Text content, absent for attachment-only messages
    pub text: Option<String>,
    /// Display name of the sender
    #[serde(default)]
    pub name: String,
}

/// A transient bot identity bound to one group.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Bot {
    /// Identifier used to post as the bot and to destroy it
    pub bot_id: String,
    /// Group the bot posts into
    pub group_id: String,
    /// Display name of the bot
    pub name: String,
}

/// The user owning the API credential.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier of the user
    pub id: String,
    /// Display name of the user
    #[serde(default)]
    pub name: String,
}
