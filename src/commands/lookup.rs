//! Group and member resolution.
//!
//! Nothing is cached: each lookup fetches the full group list again and scans
//! it linearly.

use log::debug;
use reqwest::Error;

use crate::groupme::{Group, Member, Requester};

/// Finds the group with the given id.
///
/// Returns `Ok(None)` when no group has that id. If the service lists the same
/// id twice, the first group in list order wins.
pub async fn find_group<R: Requester>(requester: &R, group_id: &str) -> Result<Option<Group>, Error> {
    let group = requester
        .get_groups()
        .await?
        .into_iter()
        .find(|group| group.id == group_id);

    match &group {
        Some(group) => debug!("group {} resolved to {}", group_id, group),
        None => debug!("group {} not found", group_id),
    }

    Ok(group)
}

/// Lists the members of every group, flattened in group order.
///
/// A user belonging to several groups appears once per group.
pub async fn all_members<R: Requester>(requester: &R) -> Result<Vec<Member>, Error> {
    Ok(requester
        .get_groups()
        .await?
        .into_iter()
        .flat_map(|group| group.members)
        .collect())
}

/// Finds the first membership whose user id matches.
pub async fn find_member<R: Requester>(requester: &R, user_id: &str) -> Result<Option<Member>, Error> {
    let member = all_members(requester)
        .await?
        .into_iter()
        .find(|member| member.user_id == user_id);

    if let Some(member) = &member {
        debug!("user {} resolved to {}", user_id, member);
    }

    Ok(member)
}

#[cfg(test)]
mod tests {
    use crate::{
        commands::test_utils::{create_group, create_groups, create_member},
        groupme::MockRequester,
    };

    use super::*;

    #[tokio::test]
    async fn test_find_group() {
        let mut requester = MockRequester::new();
        requester
            .expect_get_groups()
            .times(1)
            .returning(|| Ok(create_groups()));

        let group = find_group(&requester, "2").await.unwrap().unwrap();
        assert_eq!(group.name, "Chess");
    }

    #[tokio::test]
    async fn test_find_group_absent() {
        let mut requester = MockRequester::new();
        requester
            .expect_get_groups()
            .times(1)
            .returning(|| Ok(create_groups()));

        assert!(find_group(&requester, "3").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_group_duplicate_ids_first_wins() {
        let mut requester = MockRequester::new();
        requester.expect_get_groups().times(1).returning(|| {
            Ok(vec![
                create_group("5", "First", "1", vec![]),
                create_group("5", "Second", "1", vec![]),
            ])
        });

        let group = find_group(&requester, "5").await.unwrap().unwrap();
        assert_eq!(group.name, "First");
    }

    #[tokio::test]
    async fn test_find_group_refetches_every_time() {
        let mut requester = MockRequester::new();
        requester
            .expect_get_groups()
            .times(2)
            .returning(|| Ok(create_groups()));

        assert!(find_group(&requester, "1").await.unwrap().is_some());
        assert!(find_group(&requester, "1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_all_members_flattens_without_dedup() {
        let mut requester = MockRequester::new();
        requester.expect_get_groups().times(1).returning(|| {
            Ok(vec![
                create_group("1", "A", "7", vec![create_member("m1", "7", "Alice")]),
                create_group("2", "B", "7", vec![create_member("m9", "7", "Alice")]),
            ])
        });

        let members = all_members(&requester).await.unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].membership_id, "m1");
        assert_eq!(members[1].membership_id, "m9");
    }

    #[tokio::test]
    async fn test_find_member() {
        let mut requester = MockRequester::new();
        requester
            .expect_get_groups()
            .times(2)
            .returning(|| Ok(create_groups()));

        let member = find_member(&requester, "9").await.unwrap().unwrap();
        assert_eq!(member.nickname, "Carol");
        assert!(find_member(&requester, "10").await.unwrap().is_none());
    }
}
