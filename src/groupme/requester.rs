//! HTTP client for the GroupMe v3 API.
//!
//! This module provides the [`GroupMeRequester`] struct for making HTTP requests
//! to the GroupMe service. Authentication is a plain access token passed as the
//! `token` query parameter on every call.

use log::{debug, info};
use mockall::automock;
use reqwest::{Client, Error, StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::groupme::{
    response_structs::{BotCreated, Envelope, MessagesPage},
    structs::{Bot, Group, Member, Message, User},
};

/// Maximum page size accepted by `GET /groups`.
const GROUPS_PER_PAGE: u32 = 500;

/// HTTP client for requesting data from the GroupMe service.
///
/// # Examples
///
/// ```no_run
/// let requester = GroupMeRequester::new("https://api.groupme.com/v3", "access_token");
/// let groups = requester.get_groups().await.unwrap();
/// println!("Groups: {:?}", groups);
/// ```
pub struct GroupMeRequester {
    /// GroupMe API base url, without trailing slash
    url: String,
    /// GroupMe access token
    token: String,
    /// HTTP client
    client: Client,
}

/// Trait for making requests to the chat service.
///
/// This trait abstracts the HTTP operations so command handlers can be tested
/// against mocks.
#[automock]
pub trait Requester {
    /// Fetches every group the user belongs to, members included.
    async fn get_groups(&self) -> Result<Vec<Group>, Error>;
    /// Fetches the user owning the access token.
    async fn get_me(&self) -> Result<User, Error>;
    /// Fetches the latest page of messages of a group, newest first.
    async fn get_messages(&self, group_id: &str) -> Result<Vec<Message>, Error>;
    /// Posts a message to a group.
    async fn post_message(&self, group_id: &str, text: &str) -> Result<(), Error>;
    /// Likes a message of a group.
    async fn like_message(&self, group_id: &str, message_id: &str) -> Result<(), Error>;
    /// Sends a direct message to a user.
    async fn post_direct_message(&self, user_id: &str, text: &str) -> Result<(), Error>;
    /// Creates a bot bound to a group.
    async fn create_bot(&self, name: &str, group_id: &str, avatar_url: &str)
    -> Result<Bot, Error>;
    /// Posts a message as a bot.
    async fn post_as_bot(&self, bot_id: &str, text: &str) -> Result<(), Error>;
    /// Destroys a bot.
    async fn destroy_bot(&self, bot_id: &str) -> Result<(), Error>;
    /// Removes a membership from a group.
    async fn remove_member(&self, group_id: &str, membership_id: &str) -> Result<(), Error>;
    /// Adds users to a group.
    async fn add_members(&self, group_id: &str, members: &[Member]) -> Result<(), Error>;
}

impl GroupMeRequester {
    /// Create a new [GroupMeRequester].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the GroupMe API.
    /// * `token` - The access token of the user.
    pub fn new(url: &str, token: &str) -> Self {
        let client = reqwest::Client::new();
        GroupMeRequester {
            url: url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client,
        }
    }

    /// Sends a `POST` with a JSON body and checks the status.
    async fn post(&self, path: &str, body: serde_json::Value) -> Result<(), Error> {
        let url = format!("{}{}", &self.url, path);
        debug!("request POST {} body={}", &url, &body);

        let response = self
            .client
            .post(&url)
            .query(&[("token", &self.token)])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        debug!("response from {} -> {}", &url, response.status());

        Ok(())
    }
}

impl Requester for GroupMeRequester {
    /// Request `/groups` to get the list of groups.
    ///
    /// This api call returns the groups with their full member list:
    /// ```
    /// { "response": [ { "id": "1", "name": "A", "creator_user_id": "7", "members": [...] } ] }
    /// ```
    async fn get_groups(&self) -> Result<Vec<Group>, Error> {
        let url = format!("{}/groups", &self.url);
        info!("request groups");
        debug!("request {}?per_page={}", &url, GROUPS_PER_PAGE);

        let envelope: Envelope<Vec<Group>> = self
            .client
            .get(&url)
            .query(&[("token", self.token.as_str())])
            .query(&[("per_page", GROUPS_PER_PAGE)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("response from {} -> {} groups", &url, envelope.response.len());

        Ok(envelope.response)
    }

    async fn get_me(&self) -> Result<User, Error> {
        let url = format!("{}/users/me", &self.url);
        info!("request current user");

        let envelope: Envelope<User> = self
            .client
            .get(&url)
            .query(&[("token", &self.token)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("response from {} -> {:?}", &url, &envelope.response);

        Ok(envelope.response)
    }

    /// Request `/groups/{group_id}/messages` to get the latest page of messages.
    ///
    /// The service answers `304 Not Modified` with an empty body when the group
    /// has no messages, which is mapped to an empty list.
    async fn get_messages(&self, group_id: &str) -> Result<Vec<Message>, Error> {
        let url = format!("{}/groups/{}/messages", &self.url, group_id);
        info!("request messages of group {}", group_id);

        let response = self
            .client
            .get(&url)
            .query(&[("token", &self.token)])
            .send()
            .await?
            .error_for_status()?;

        if response.status() == StatusCode::NOT_MODIFIED {
            debug!("response from {} -> no messages", &url);
            return Ok(vec![]);
        }

        let envelope: Envelope<MessagesPage> = response.json().await?;
        debug!(
            "response from {} -> {} of {} messages",
            &url,
            envelope.response.messages.len(),
            envelope.response.count
        );

        Ok(envelope.response.messages)
    }

    async fn post_message(&self, group_id: &str, text: &str) -> Result<(), Error> {
        info!("post message to group {}", group_id);
        let body = json!({
            "message": {
                "source_guid": Uuid::new_v4().to_string(),
                "text": text,
            }
        });
        self.post(&format!("/groups/{}/messages", group_id), body)
            .await
    }

    async fn like_message(&self, group_id: &str, message_id: &str) -> Result<(), Error> {
        info!("like message {} of group {}", message_id, group_id);
        self.post(
            &format!("/messages/{}/{}/like", group_id, message_id),
            json!({}),
        )
        .await
    }

    async fn post_direct_message(&self, user_id: &str, text: &str) -> Result<(), Error> {
        info!("post direct message to user {}", user_id);
        let body = json!({
            "direct_message": {
                "source_guid": Uuid::new_v4().to_string(),
                "recipient_id": user_id,
                "text": text,
            }
        });
        self.post("/direct_messages", body).await
    }

    async fn create_bot(
        &self,
        name: &str,
        group_id: &str,
        avatar_url: &str,
    ) -> Result<Bot, Error> {
        let url = format!("{}/bots", &self.url);
        info!("create bot {} in group {}", name, group_id);

        let envelope: Envelope<BotCreated> = self
            .client
            .post(&url)
            .query(&[("token", &self.token)])
            .json(&json!({
                "bot": {
                    "name": name,
                    "group_id": group_id,
                    "avatar_url": avatar_url,
                }
            }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("response from {} -> {:?}", &url, &envelope.response.bot);

        Ok(envelope.response.bot)
    }

    async fn post_as_bot(&self, bot_id: &str, text: &str) -> Result<(), Error> {
        info!("post message as bot {}", bot_id);
        self.post("/bots/post", json!({ "bot_id": bot_id, "text": text }))
            .await
    }

    async fn destroy_bot(&self, bot_id: &str) -> Result<(), Error> {
        info!("destroy bot {}", bot_id);
        self.post("/bots/destroy", json!({ "bot_id": bot_id })).await
    }

    async fn remove_member(&self, group_id: &str, membership_id: &str) -> Result<(), Error> {
        info!("remove membership {} from group {}", membership_id, group_id);
        self.post(
            &format!("/groups/{}/members/{}/remove", group_id, membership_id),
            json!({}),
        )
        .await
    }

    async fn add_members(&self, group_id: &str, members: &[Member]) -> Result<(), Error> {
        info!("add {} members to group {}", members.len(), group_id);
        self.post(
            &format!("/groups/{}/members/add", group_id),
            json!({ "members": members }),
        )
        .await
    }
}
