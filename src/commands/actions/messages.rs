//! Handlers reading the latest page of messages of a group.

use log::debug;
use reqwest::Error;

use crate::{
    commands::{
        CommandContext, CommandResult,
        console_response::{format_messages, format_no_messages, format_no_such_group},
        lookup::find_group,
    },
    groupme::Requester,
    smiley::SmileySource,
};

/// Shows the beginning of each message in the latest page.
pub async fn handle_messages<R: Requester, S: SmileySource>(
    context: &CommandContext<R, S>,
    group_id: &str,
) -> Result<CommandResult, Error> {
    debug!("handling messages command for group {}", group_id);

    let Some(group) = find_group(&context.requester, group_id).await? else {
        return Ok(CommandResult::new(format_no_such_group(group_id)));
    };

    let messages = context.requester.get_messages(&group.id).await?;

    Ok(CommandResult::new(format_messages(&messages)))
}

/// Likes the newest message of a group.
pub async fn handle_like<R: Requester, S: SmileySource>(
    context: &CommandContext<R, S>,
    group_id: &str,
) -> Result<CommandResult, Error> {
    debug!("handling like command for group {}", group_id);

    let Some(group) = find_group(&context.requester, group_id).await? else {
        return Ok(CommandResult::new(format_no_such_group(group_id)));
    };

    // Pages are ordered newest first
    let messages = context.requester.get_messages(&group.id).await?;
    let Some(newest) = messages.first() else {
        return Ok(CommandResult::new(format_no_messages(group_id)));
    };

    context.requester.like_message(&group.id, &newest.id).await?;

    Ok(CommandResult::silent())
}
