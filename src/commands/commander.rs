//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, which serves as the main entry point
//! for processing prompt lines. It coordinates command parsing and execution, routing
//! commands to their appropriate handlers.
//!
//! # Flow
//!
//! ```text
//! Input line → parse() → Vec<Command> → execute() (each, in order) → CommandResult
//! ```
//!
//! # Examples
//!
//! ```no_run
//! let commander = Commander::new(context);
//!
//! for command in commander.parse("/groups") {
//!     let result = commander.execute(&command).await?;
//!     println!("{}", result.response);
//! }
//! ```

use log::debug;
use reqwest::Error;

use crate::{
    commands::{
        CommandContext, CommandResult,
        actions::{
            handle_botsay, handle_dm, handle_dmspam, handle_groups, handle_help, handle_like,
            handle_messages, handle_msg, handle_msgall, handle_readd, handle_spam, handle_users,
        },
        command::Command,
    },
    groupme::Requester,
    smiley::SmileySource,
};

/// Command orchestrator for parsing and executing prompt commands.
///
/// The Commander is responsible for:
/// - Parsing raw lines into every command they match
/// - Routing commands to the appropriate handlers
///
/// Lines matching no command produce no command and no network call.
pub struct Commander<R: Requester, S: SmileySource> {
    /// Collaborators and configuration shared by every handler
    context: CommandContext<R, S>,
}

impl<R: Requester, S: SmileySource> Commander<R, S> {
    /// Creates a new Commander running commands against the given context.
    pub fn new(context: CommandContext<R, S>) -> Self {
        Commander { context }
    }

    /// Parses a prompt line into the commands it matches, in table order.
    pub fn parse(&self, line: &str) -> Vec<Command> {
        Command::parse_all(line)
    }

    /// Executes a parsed command and returns its console output.
    ///
    /// # Command Handlers
    ///
    /// - [`Command::Help`] → [`handle_help`]
    /// - [`Command::Groups`] → [`handle_groups`]
    /// - [`Command::Users`] → [`handle_users`]
    /// - [`Command::Msg`] → [`handle_msg`]
    /// - [`Command::MsgAll`] → [`handle_msgall`]
    /// - [`Command::Messages`] → [`handle_messages`]
    /// - [`Command::Like`] → [`handle_like`]
    /// - [`Command::BotSay`] → [`handle_botsay`]
    /// - [`Command::ReAdd`] → [`handle_readd`]
    /// - [`Command::Dm`] → [`handle_dm`]
    /// - [`Command::DmSpam`] → [`handle_dmspam`]
    /// - [`Command::Spam`] → [`handle_spam`]
    ///
    /// # Errors
    ///
    /// Returns the first transport error met by the handler.
    pub async fn execute(&self, command: &Command) -> Result<CommandResult, Error> {
        debug!("executing {:?}", command);

        let context = &self.context;
        match command {
            Command::Help => Ok(handle_help()),
            Command::Groups => handle_groups(context).await,
            Command::Users(group_id) => handle_users(context, group_id.as_deref()).await,
            Command::Msg(group_id, text) => handle_msg(context, group_id, text).await,
            Command::MsgAll(text) => handle_msgall(context, text).await,
            Command::Messages(group_id) => handle_messages(context, group_id).await,
            Command::Like(group_id) => handle_like(context, group_id).await,
            Command::BotSay(bot_name, group_id, text) => {
                handle_botsay(context, bot_name, group_id, text).await
            }
            Command::ReAdd(group_id) => handle_readd(context, group_id).await,
            Command::Dm(user_id, text) => handle_dm(context, user_id, text).await,
            Command::DmSpam(user_id, count, text) => {
                handle_dmspam(context, user_id, *count, text.as_deref()).await
            }
            Command::Spam(group_id, count, text) => {
                handle_spam(context, group_id, *count, text.as_deref()).await
            }
        }
    }

    /// Prompt displayed before each line.
    pub fn prompt(&self) -> &str {
        &self.context.config.prompt
    }

    /// Message displayed once at startup.
    pub fn greeting(&self) -> &str {
        &self.context.config.greeting
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use crate::{
        commands::test_utils::{create_context, create_group, create_groups},
        groupme::MockRequester,
        smiley::MockSmileySource,
    };

    use super::*;

    #[test]
    fn test_parse_unrecognized_line() {
        // No expectation is set: any call on the mocks would panic
        let commander = Commander::new(create_context(
            MockRequester::new(),
            MockSmileySource::new(),
        ));

        assert!(commander.parse("hello").is_empty());
        assert!(commander.parse("/nope 1").is_empty());
    }

    #[tokio::test]
    async fn test_execute_help_makes_no_call() {
        let commander = Commander::new(create_context(
            MockRequester::new(),
            MockSmileySource::new(),
        ));

        let result = commander.execute(&Command::Help).await.unwrap();
        assert!(result.response.contains("/botsay"));
    }

    #[tokio::test]
    async fn test_execute_msg_scenario() {
        let mut requester = MockRequester::new();
        requester
            .expect_get_groups()
            .times(1)
            .returning(|| Ok(vec![create_group("42", "Answers", "1", vec![])]));
        requester
            .expect_post_message()
            .with(eq("42"), eq("Hello 😃 there"))
            .times(1)
            .returning(|_, _| Ok(()));
        let commander = Commander::new(create_context(requester, MockSmileySource::new()));

        let commands = commander.parse("/msg 42 Hello :) there");
        assert_eq!(commands.len(), 1);
        let result = commander.execute(&commands[0]).await.unwrap();
        assert!(result.is_silent());
    }

    #[tokio::test]
    async fn test_execute_users_of_group() {
        let mut requester = MockRequester::new();
        requester
            .expect_get_groups()
            .times(1)
            .returning(|| Ok(create_groups()));
        let commander = Commander::new(create_context(requester, MockSmileySource::new()));

        let result = commander
            .execute(&Command::Users(Some("1".to_string())))
            .await
            .unwrap();
        assert_eq!(result.response, "         7 | Alice\n         8 | Bob");
    }

    #[test]
    fn test_prompt_and_greeting() {
        let commander = Commander::new(create_context(
            MockRequester::new(),
            MockSmileySource::new(),
        ));

        assert_eq!(commander.prompt(), "~>");
        assert!(commander.greeting().contains("/help"));
    }
}
