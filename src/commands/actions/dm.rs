//! Direct message command handler.
//!
//! Unlike group messages, direct messages are sent exactly as typed, without
//! emoticon expansion.

use log::debug;
use reqwest::Error;

use crate::{
    commands::{
        CommandContext, CommandResult, console_response::format_no_such_user, lookup::find_member,
    },
    groupme::Requester,
    smiley::SmileySource,
};

/// Sends a direct message to a user found in any known group.
pub async fn handle_dm<R: Requester, S: SmileySource>(
    context: &CommandContext<R, S>,
    user_id: &str,
    text: &str,
) -> Result<CommandResult, Error> {
    debug!("handling dm command for user {}", user_id);

    let Some(member) = find_member(&context.requester, user_id).await? else {
        return Ok(CommandResult::new(format_no_such_user(user_id)));
    };

    context
        .requester
        .post_direct_message(&member.user_id, text)
        .await?;

    Ok(CommandResult::silent())
}
