//! Command parsing.
//!
//! Each command is recognized by a regular expression anchored at the start of
//! the line. The table is ordered and every entry is tried, so one line can
//! yield several commands.

use std::sync::LazyLock;

use log::debug;
use regex::{Captures, Regex};

/// Represents a parsed prompt command.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Command {
    /// Display help information
    Help,
    /// List all groups
    Groups,
    /// List members of a group, or every known member when no group is given
    ///
    /// # Fields
    ///
    /// * `Option<String>` - Group ID
    Users(Option<String>),
    /// Send a message to a group
    ///
    /// # Fields
    ///
    /// * `String` - Group ID
    /// * `String` - Message text
    Msg(String, String),
    /// Send a message to every group
    MsgAll(String),
    /// Show the latest messages of a group
    Messages(String),
    /// Like the newest message of a group
    Like(String),
    /// Send a message from a transient bot
    ///
    /// # Fields
    ///
    /// * `String` - Bot name
    /// * `String` - Group ID
    /// * `String` - Message text
    BotSay(String, String, String),
    /// Remove and re-add every member of a group, except the caller and the creator
    ReAdd(String),
    /// Send a direct message
    ///
    /// # Fields
    ///
    /// * `String` - User ID
    /// * `String` - Message text
    Dm(String, String),
    /// Repeat a direct message
    ///
    /// # Fields
    ///
    /// * `String` - User ID
    /// * `u32` - Requested count
    /// * `Option<String>` - Message text, a random smiley when absent
    DmSpam(String, u32, Option<String>),
    /// Repeat a group message
    ///
    /// # Fields
    ///
    /// * `String` - Group ID
    /// * `u32` - Requested count
    /// * `Option<String>` - Message text, a random smiley when absent
    Spam(String, u32, Option<String>),
}

type Builder = fn(&Captures) -> Option<Command>;

static USERS_IN_GROUP: LazyLock<Regex> = LazyLock::new(|| pattern(r"/users\s([0-9]+)"));

static PATTERNS: LazyLock<Vec<(Regex, Builder)>> = LazyLock::new(|| {
    let table: [(&str, Builder); 12] = [
        (r"/help", |_| Some(Command::Help)),
        (r"/groups", |_| Some(Command::Groups)),
        (r"/users.*", |caps| {
            let group_id = USERS_IN_GROUP
                .captures(caps.get(0)?.as_str())
                .map(|inner| inner[1].to_string());
            Some(Command::Users(group_id))
        }),
        (r"/msg\s([0-9]+)(.+)", |caps| {
            Some(Command::Msg(caps[1].to_string(), text(&caps[2])?))
        }),
        (r"/msgall\s(.+)", |caps| Some(Command::MsgAll(text(&caps[1])?))),
        (r"/messages\s([0-9]+)", |caps| {
            Some(Command::Messages(caps[1].to_string()))
        }),
        // The message id is required but ignored: the newest message is liked
        (r"/like\s([0-9]+)\s([0-9]+)", |caps| {
            Some(Command::Like(caps[1].to_string()))
        }),
        (r"/botsay\s(.+)\s([0-9]+)\s(.+)", |caps| {
            Some(Command::BotSay(
                caps[1].to_string(),
                caps[2].to_string(),
                text(&caps[3])?,
            ))
        }),
        (r"/readd\s([0-9]+)", |caps| Some(Command::ReAdd(caps[1].to_string()))),
        (r"/dm\s([0-9]+)(.+)", |caps| {
            Some(Command::Dm(caps[1].to_string(), text(&caps[2])?))
        }),
        (r"/dmspam\s([0-9]+)\s([0-9]+)(.*)", |caps| {
            Some(Command::DmSpam(
                caps[1].to_string(),
                caps[2].parse().ok()?,
                text(&caps[3]),
            ))
        }),
        (r"/spam\s([0-9]+)\s([0-9]+)(.*)", |caps| {
            Some(Command::Spam(
                caps[1].to_string(),
                caps[2].parse().ok()?,
                text(&caps[3]),
            ))
        }),
    ];

    table
        .into_iter()
        .map(|(source, builder)| (pattern(source), builder))
        .collect()
});

/// Compiles a pattern anchored at the start of the line.
fn pattern(source: &str) -> Regex {
    Regex::new(&format!("^{}", source)).expect("valid command pattern")
}

/// Free text argument without its leading separator, `None` when blank.
fn text(raw: &str) -> Option<String> {
    let trimmed = raw.trim_start();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl Command {
    /// Parses a line into every command it matches, in table order.
    ///
    /// Unrecognized lines yield an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// let commands = Command::parse_all("/msg 42 Hello :) there");
    /// assert_eq!(commands, vec![Command::Msg("42".to_string(), "Hello :) there".to_string())]);
    /// ```
    pub fn parse_all(line: &str) -> Vec<Command> {
        let commands: Vec<Command> = PATTERNS
            .iter()
            .filter_map(|(regex, builder)| regex.captures(line).and_then(|caps| builder(&caps)))
            .collect();

        debug!("parsed {:?} into {:?}", line, commands);

        commands
    }
}
