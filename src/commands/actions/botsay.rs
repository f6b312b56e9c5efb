//! Botsay command handler.
//!
//! A bot is created for a single post and destroyed right after. No bot
//! outlives the command.

use log::{debug, warn};
use reqwest::Error;

use crate::{
    commands::{
        CommandContext, CommandResult, console_response::format_no_such_group, lookup::find_group,
    },
    groupme::Requester,
    smiley::SmileySource,
};

/// Posts `text` verbatim in a group as a transient bot named `bot_name`.
///
/// The bot is destroyed even when the post fails; the post error is then
/// returned after the destruction.
pub async fn handle_botsay<R: Requester, S: SmileySource>(
    context: &CommandContext<R, S>,
    bot_name: &str,
    group_id: &str,
    text: &str,
) -> Result<CommandResult, Error> {
    debug!("handling botsay command for bot {} in group {}", bot_name, group_id);

    let Some(group) = find_group(&context.requester, group_id).await? else {
        return Ok(CommandResult::new(format_no_such_group(group_id)));
    };

    let bot = context
        .requester
        .create_bot(bot_name, &group.id, &context.config.bot_avatar)
        .await?;

    let posted = context.requester.post_as_bot(&bot.bot_id, text).await;
    if let Err(e) = &posted {
        warn!("bot {} failed to post: {}", bot.bot_id, e);
    }

    context.requester.destroy_bot(&bot.bot_id).await?;
    posted?;

    Ok(CommandResult::silent())
}
