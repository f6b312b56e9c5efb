//! Envelope structures for GroupMe API responses.
//!
//! Every GroupMe v3 endpoint wraps its payload in a `response` field next to a
//! `meta` object. These types unwrap that layer.

use serde::Deserialize;

use crate::groupme::structs::{Bot, Message};

/// Generic `{"response": ...}` wrapper.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    pub response: T,
}

/// Payload of `GET /groups/:group_id/messages`.
#[derive(Deserialize, Debug)]
pub struct MessagesPage {
    /// Total number of messages in the group
    #[serde(default)]
    pub count: u64,
    /// Latest page of messages, newest first
    pub messages: Vec<Message>,
}

/// Payload of `POST /bots`.
#[derive(Deserialize, Debug)]
pub struct BotCreated {
    pub bot: Bot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_page_envelope() {
        let json = r#"{
            "response": {
                "count": 120,
                "messages": [
                    {"id": "3", "text": "newest", "name": "Alice"},
                    {"id": "2", "text": null, "name": "Bob"}
                ]
            },
            "meta": {"code": 200}
        }"#;

        let page: Envelope<MessagesPage> = serde_json::from_str(json).unwrap();
        assert_eq!(page.response.count, 120);
        assert_eq!(page.response.messages[0].id, "3");
        assert_eq!(page.response.messages[1].text, None);
    }

    #[test]
    fn test_bot_created_envelope() {
        let json = r#"{
            "response": {"bot": {"bot_id": "b1", "group_id": "5", "name": "bob", "avatar_url": null}},
            "meta": {"code": 201}
        }"#;

        let created: Envelope<BotCreated> = serde_json::from_str(json).unwrap();
        assert_eq!(created.response.bot.bot_id, "b1");
        assert_eq!(created.response.bot.group_id, "5");
    }
}
