//! Repeated send handlers.
//!
//! Each send is followed by a fixed pause. Without text, every send fetches a
//! fresh random smiley. The first failure stops the remaining sends.
//!
//! With `legacy-repeat-count` enabled, a count of `n` sends `n - 1` messages.

use log::{debug, info};
use reqwest::Error;
use tokio::time;

use crate::{
    commands::{
        CommandContext, CommandResult,
        actions::{dm::handle_dm, msg::handle_msg},
    },
    emoticons,
    groupme::Requester,
    smiley::SmileySource,
};

/// Number of sends for a requested count.
pub fn send_count(requested: u32, legacy_repeat_count: bool) -> u32 {
    if legacy_repeat_count {
        requested.saturating_sub(1)
    } else {
        requested
    }
}

/// Target of a repeated send.
#[derive(Clone, Copy)]
enum Target<'a> {
    Group(&'a str),
    User(&'a str),
}

/// Repeatedly messages a group.
pub async fn handle_spam<R: Requester, S: SmileySource>(
    context: &CommandContext<R, S>,
    group_id: &str,
    count: u32,
    text: Option<&str>,
) -> Result<CommandResult, Error> {
    debug!("handling spam command for group {}", group_id);
    repeat(context, Target::Group(group_id), count, text).await
}

/// Repeatedly messages a user directly.
pub async fn handle_dmspam<R: Requester, S: SmileySource>(
    context: &CommandContext<R, S>,
    user_id: &str,
    count: u32,
    text: Option<&str>,
) -> Result<CommandResult, Error> {
    debug!("handling dmspam command for user {}", user_id);
    repeat(context, Target::User(user_id), count, text).await
}

async fn repeat<R: Requester, S: SmileySource>(
    context: &CommandContext<R, S>,
    target: Target<'_>,
    count: u32,
    text: Option<&str>,
) -> Result<CommandResult, Error> {
    let sends = send_count(count, context.config.legacy_repeat_count);
    let text = text.map(emoticons::expand);
    info!("sending {} messages", sends);

    for _ in 0..sends {
        let message = match &text {
            Some(text) => text.clone(),
            None => context.smileys.random_smiley().await?,
        };

        let result = match target {
            Target::Group(group_id) => handle_msg(context, group_id, &message).await?,
            Target::User(user_id) => handle_dm(context, user_id, &message).await?,
        };

        // An unresolved target will not resolve on the next iteration either
        if !result.is_silent() {
            return Ok(result);
        }

        time::sleep(context.config.spam_delay).await;
    }

    Ok(CommandResult::silent())
}
