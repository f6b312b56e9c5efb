//! Group message handlers.
//!
//! Both handlers expand emoticon codes before posting.

use log::debug;
use reqwest::Error;

use crate::{
    commands::{
        CommandContext, CommandResult, console_response::format_no_such_group, lookup::find_group,
    },
    emoticons,
    groupme::Requester,
    smiley::SmileySource,
};

/// Posts a message to a group.
///
/// Prints a diagnostic and posts nothing when the group cannot be resolved.
pub async fn handle_msg<R: Requester, S: SmileySource>(
    context: &CommandContext<R, S>,
    group_id: &str,
    text: &str,
) -> Result<CommandResult, Error> {
    debug!("handling msg command for group {}", group_id);

    let Some(group) = find_group(&context.requester, group_id).await? else {
        return Ok(CommandResult::new(format_no_such_group(group_id)));
    };

    context
        .requester
        .post_message(&group.id, &emoticons::expand(text))
        .await?;

    Ok(CommandResult::silent())
}

/// Posts a message to every known group, one after the other.
pub async fn handle_msgall<R: Requester, S: SmileySource>(
    context: &CommandContext<R, S>,
    text: &str,
) -> Result<CommandResult, Error> {
    debug!("handling msgall command");

    let text = emoticons::expand(text);
    for group in context.requester.get_groups().await? {
        context.requester.post_message(&group.id, &text).await?;
    }

    Ok(CommandResult::silent())
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

    #[tokio::test]
    async fn test_handle_msg_expands_emoticons() {
        let mut requester = MockRequester::new();
        requester.expect_get_groups().times(1).returning(|| {
            Ok(vec![create_group("42", "Answers", "7", vec![])])
        });
        requester
            .expect_post_message()
            .with(eq("42"), eq("Hello 😃 there"))
            .times(1)
            .returning(|_, _| Ok(()));
        let context = create_context(requester, MockSmileySource::new());

        let result = handle_msg(&context, "42", "Hello :) there").await.unwrap();
        assert!(result.is_silent());
    }

    #[tokio::test]
    async fn test_handle_msg_unknown_group() {
        let mut requester = MockRequester::new();
        requester
            .expect_get_groups()
            .times(1)
            .returning(|| Ok(create_groups()));
        requester.expect_post_message().never();
        let context = create_context(requester, MockSmileySource::new());

        let result = handle_msg(&context, "42", "hello").await.unwrap();
        assert_eq!(result.response, "42 -- no such group.");
    }

    #[tokio::test]
    async fn test_handle_msgall_posts_to_every_group() {
        let mut requester = MockRequester::new();
        requester
            .expect_get_groups()
            .times(1)
            .returning(|| Ok(create_groups()));
        requester
            .expect_post_message()
            .with(eq("1"), eq("hi 😉"))
            .times(1)
            .returning(|_, _| Ok(()));
        requester
            .expect_post_message()
            .with(eq("2"), eq("hi 😉"))
            .times(1)
            .returning(|_, _| Ok(()));
        let context = create_context(requester, MockSmileySource::new());

        let result = handle_msgall(&context, "hi ;)").await.unwrap();
        assert!(result.is_silent());
    }
}
