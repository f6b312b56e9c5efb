//! Random kaomoji fetcher.
//!
//! Spam commands sent without text fall back to a random smiley fetched from a
//! third-party endpoint. The endpoint answers with a single HTML-escaped
//! kaomoji as plain text.

use log::{debug, info};
use mockall::automock;
use reqwest::{Client, Error};

/// Source of random smileys.
#[automock]
pub trait SmileySource {
    /// Fetches one random smiley.
    async fn random_smiley(&self) -> Result<String, Error>;
}

/// Fetches smileys with a single `GET`, never retried.
pub struct SmileyRequester {
    /// Endpoint returning a random smiley
    url: String,
    /// HTTP client
    client: Client,
}

impl SmileyRequester {
    /// Create a new [SmileyRequester] for the given endpoint.
    pub fn new(url: &str) -> Self {
        SmileyRequester {
            url: url.to_string(),
            client: Client::new(),
        }
    }
}

impl SmileySource for SmileyRequester {
    async fn random_smiley(&self) -> Result<String, Error> {
        info!("request random smiley");

        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let smiley = html_escape::decode_html_entities(&body).into_owned();
        debug!("response from {} -> {}", &self.url, &smiley);

        Ok(smiley)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_random_smiley_unescapes_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/fun/kaomoji/get.php")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("(&gt;&lt;)&amp;&#x30C4;")
            .create_async()
            .await;

        let requester = SmileyRequester::new(&format!("{}/fun/kaomoji/get.php", server.url()));
        let smiley = requester.random_smiley().await.unwrap();
        assert_eq!(smiley, "(><)&ツ");
    }

    #[tokio::test]
    async fn test_random_smiley_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(500)
            .create_async()
            .await;

        let requester = SmileyRequester::new(&server.url());
        assert!(requester.random_smiley().await.is_err());
    }
}
