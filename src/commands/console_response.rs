//! Console response formatters for prompt commands.
//!
//! Every function returns the exact text printed for a command, without a
//! trailing newline.

use crate::groupme::{Group, Member, Message};

/// Number of characters shown per message by `/messages`.
const MESSAGE_PREVIEW_CHARS: usize = 15;

/// Formats the synopsis of every command.
///
/// # Examples
///
/// ```
/// let help = format_help();
/// assert!(help.contains("Available commands:"));
/// ```
pub fn format_help() -> String {
    "Available commands:\n\
    \x20 /help -- display help\n\
    \x20 /groups -- list available groups\n\
    \x20 /users [group] -- display all users in a group, or all known users if no group is specified\n\
    \x20 /msg <group> <message> -- send a message to a group\n\
    \x20 /msgall <message> -- send message to all known groups\n\
    \x20 /messages <groupid> -- get recent messages from group\n\
    \x20 /like <groupid> <messageid> -- like the latest message in <groupid>\n\
    \x20 /botsay <botname> <groupid> <message> -- send a message from a bot\n\
    \x20 /dm <userid> <message> -- send direct message to user\n\
    \x20 /dmspam <userid> <n> [message] -- send direct message to user, n times. \
    If no message is specified, a random unicode smiley will be sent.\n\
    \x20 /spam <groupid> <n> [message] -- send message to group, n times. \
    If no message is specified, a random unicode smiley will be sent.\n\
    \x20 /readd <groupid> -- remove and re-add all users of a group (except you and the creator)"
        .to_owned()
}

/// Formats one `<id> | <name>` line per group, ids right-aligned on 8 columns.
pub fn format_groups(groups: &[Group]) -> String {
    groups
        .iter()
        .map(|group| format!("{:>8} | {}", group.id, group.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats one `<user id> | <nickname>` line per member, ids right-aligned on 10 columns.
pub fn format_members(members: &[Member]) -> String {
    members
        .iter()
        .map(|member| format!("{:>10} | {}", member.user_id, member.nickname))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats the first characters of each message having text.
pub fn format_messages(messages: &[Message]) -> String {
    messages
        .iter()
        .filter_map(|message| message.text.as_deref())
        .map(|text| text.chars().take(MESSAGE_PREVIEW_CHARS).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_no_such_group(group_id: &str) -> String {
    format!("{} -- no such group.", group_id)
}

pub fn format_no_such_user(user_id: &str) -> String {
    format!("{} -- no such user.", user_id)
}

pub fn format_no_messages(group_id: &str) -> String {
    format!("{} -- no messages.", group_id)
}

/// Formats the outcome of a membership reset.
pub fn format_readd(group: &Group, removed: usize, re_added: usize) -> String {
    format!(
        "{} -- removed {} members, re-added {} members.",
        group.name, removed, re_added
    )
}

#[cfg(test)]
mod tests {
    use crate::commands::test_utils::{create_groups, create_member};

    use super::*;

    #[test]
    fn test_format_help_lists_every_command() {
        let help = format_help();
        for command in [
            "/help", "/groups", "/users", "/msg ", "/msgall", "/messages", "/like", "/botsay",
            "/dm ", "/dmspam", "/spam", "/readd",
        ] {
            assert!(help.contains(command), "missing {command}");
        }
        assert!(help.contains("\n  /groups -- list available groups\n"));
    }

    #[test]
    fn test_format_groups_alignment() {
        let output = format_groups(&create_groups());
        assert_eq!(output, "       1 | Climbing\n       2 | Chess");
    }

    #[test]
    fn test_format_groups_empty() {
        assert_eq!(format_groups(&[]), "");
    }

    #[test]
    fn test_format_members_alignment() {
        let output = format_members(&[
            create_member("m1", "7", "Alice"),
            create_member("m2", "12345678901", "Bob"),
        ]);
        assert_eq!(output, "         7 | Alice\n12345678901 | Bob");
    }

    #[test]
    fn test_format_messages_truncates_and_skips_empty() {
        let messages = vec![
            Message {
                id: "2".to_string(),
                text: Some("a rather long message text".to_string()),
                name: "Alice".to_string(),
            },
            Message {
                id: "1".to_string(),
                text: None,
                name: "Bob".to_string(),
            },
            Message {
                id: "0".to_string(),
                text: Some("héllo wörld ✓ ok".to_string()),
                name: "Carol".to_string(),
            },
        ];

        assert_eq!(
            format_messages(&messages),
            "a rather long m\nhéllo wörld ✓ o"
        );
    }

    #[test]
    fn test_format_diagnostics() {
        assert_eq!(format_no_such_group("42"), "42 -- no such group.");
        assert_eq!(format_no_such_user("8"), "8 -- no such user.");
        assert_eq!(format_no_messages("42"), "42 -- no messages.");
    }
}
