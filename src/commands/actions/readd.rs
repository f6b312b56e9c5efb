//! Readd command handler.
//!
//! Removes every member of a group except the caller and the creator, waits,
//! then re-adds the whole roster captured before the removals. The caller and
//! the creator are part of that roster, so they receive a harmless re-add too.
//!
//! Failures are not rolled back: the group stays in whatever state the service
//! reached.

use log::{debug, info};
use reqwest::Error;
use tokio::time;

use crate::{
    commands::{
        CommandContext, CommandResult,
        console_response::{format_no_such_group, format_readd},
        lookup::find_group,
    },
    groupme::Requester,
    smiley::SmileySource,
};

/// Removes and re-adds the members of a group.
pub async fn handle_readd<R: Requester, S: SmileySource>(
    context: &CommandContext<R, S>,
    group_id: &str,
) -> Result<CommandResult, Error> {
    debug!("handling readd command for group {}", group_id);

    let Some(group) = find_group(&context.requester, group_id).await? else {
        return Ok(CommandResult::new(format_no_such_group(group_id)));
    };

    let me = context.requester.get_me().await?;

    let mut removed = 0;
    for member in &group.members {
        if member.user_id == me.id || member.user_id == group.creator_user_id {
            debug!("keep member {}", member);
            continue;
        }

        context
            .requester
            .remove_member(&group.id, &member.membership_id)
            .await?;
        removed += 1;
    }

    info!(
        "removed {} members from group {}, re-adding in {:?}",
        removed, group.id, context.config.readd_delay
    );
    time::sleep(context.config.readd_delay).await;

    context
        .requester
        .add_members(&group.id, &group.members)
        .await?;

    Ok(CommandResult::new(format_readd(
        &group,
        removed,
        group.members.len(),
    )))
}

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::eq};

    use crate::{
        commands::test_utils::{create_context, create_group, create_groups, create_member},
        groupme::{MockRequester, User},
        smiley::MockSmileySource,
    };

    use super::*;

    #[tokio::test]
    async fn test_handle_readd_keeps_caller_and_creator() {
        let mut seq = Sequence::new();
        let mut requester = MockRequester::new();
        requester
            .expect_get_groups()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| {
                Ok(vec![create_group(
                    "1",
                    "Climbing",
                    "7",
                    vec![
                        create_member("m1", "7", "Creator"),
                        create_member("m2", "8", "Me"),
                        create_member("m3", "9", "Carol"),
                        create_member("m4", "10", "Dave"),
                    ],
                )])
            });
        requester
            .expect_get_me()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| {
                Ok(User {
                    id: "8".to_string(),
                    name: "Me".to_string(),
                })
            });
        requester
            .expect_remove_member()
            .with(eq("1"), eq("m3"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        requester
            .expect_remove_member()
            .with(eq("1"), eq("m4"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        requester
            .expect_add_members()
            .withf(|group_id, members| {
                let user_ids: Vec<&str> = members.iter().map(|m| m.user_id.as_str()).collect();
                group_id == "1" && user_ids == ["7", "8", "9", "10"]
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        let context = create_context(requester, MockSmileySource::new());

        let result = handle_readd(&context, "1").await.unwrap();
        assert_eq!(
            result.response,
            "Climbing -- removed 2 members, re-added 4 members."
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_readd_waits_before_re_adding() {
        let mut requester = MockRequester::new();
        requester
            .expect_get_groups()
            .returning(|| Ok(create_groups()));
        requester.expect_get_me().returning(|| {
            Ok(User {
                id: "7".to_string(),
                name: "Alice".to_string(),
            })
        });
        requester
            .expect_remove_member()
            .times(1)
            .returning(|_, _| Ok(()));
        requester
            .expect_add_members()
            .times(1)
            .returning(|_, _| Ok(()));
        let mut context = create_context(requester, MockSmileySource::new());
        context.config.readd_delay = std::time::Duration::from_secs(3);

        let start = time::Instant::now();
        handle_readd(&context, "1").await.unwrap();
        assert_eq!(start.elapsed(), std::time::Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_handle_readd_unknown_group() {
        let mut requester = MockRequester::new();
        requester
            .expect_get_groups()
            .times(1)
            .returning(|| Ok(create_groups()));
        requester.expect_get_me().never();
        requester.expect_remove_member().never();
        requester.expect_add_members().never();
        let context = create_context(requester, MockSmileySource::new());

        let result = handle_readd(&context, "3").await.unwrap();
        assert_eq!(result.response, "3 -- no such group.");
    }
}
