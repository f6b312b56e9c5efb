//! Groups command handler.

use log::debug;
use reqwest::Error;

use crate::{
    commands::{CommandContext, CommandResult, console_response::format_groups},
    groupme::Requester,
    smiley::SmileySource,
};

/// Lists every group with its id and name.
pub async fn handle_groups<R: Requester, S: SmileySource>(
    context: &CommandContext<R, S>,
) -> Result<CommandResult, Error> {
    debug!("handling groups command");

    let groups = context.requester.get_groups().await?;

    Ok(CommandResult::new(format_groups(&groups)))
}
