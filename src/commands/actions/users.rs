//! Users command handler.
//!
//! Without a group id every known member is listed, flattened across groups
//! with no de-duplication. With a group id only that group's members are
//! listed.

use log::debug;
use reqwest::Error;

use crate::{
    commands::{
        CommandContext, CommandResult,
        console_response::{format_members, format_no_such_group},
        lookup::{all_members, find_group},
    },
    groupme::Requester,
    smiley::SmileySource,
};

/// Lists members of the given group, or every known member.
pub async fn handle_users<R: Requester, S: SmileySource>(
    context: &CommandContext<R, S>,
    group_id: Option<&str>,
) -> Result<CommandResult, Error> {
    debug!("handling users command for group {:?}", group_id);

    let Some(group_id) = group_id else {
        let members = all_members(&context.requester).await?;
        return Ok(CommandResult::new(format_members(&members)));
    };

    let response = match find_group(&context.requester, group_id).await? {
        Some(group) => format_members(&group.members),
        None => format_no_such_group(group_id),
    };

    Ok(CommandResult::new(response))
}
