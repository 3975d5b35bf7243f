//! [hastebin](https://hastebin.com) backend.

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use serde::Deserialize;

use crate::paste::{
    Backend, PostingError,
    backends::http::{read_text, send_post},
};

/// Live hastebin server.
pub const HASTEBIN_URL: &str = "https://hastebin.com";
/// Public URL prefix of every hastebin document.
const HASTEBIN_DOCUMENT_BASE: &str = "https://hastebin.com/";

/// Answer of `POST /documents`.
///
/// ```json
/// { "key": "abcdef" }
/// ```
#[derive(Debug, Deserialize)]
struct DocumentResponse {
    key: Option<String>,
}

/// Posts the raw text to `/documents` and builds the URL from the returned key.
pub struct Hastebin {
    /// Shared HTTP client
    client: Client,
    /// Server base url, without trailing slash
    url: String,
}

impl Hastebin {
    /// Create a new [Hastebin] talking to the server at `url`.
    pub fn new(client: Client, url: &str) -> Self {
        Hastebin {
            client,
            url: url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Backend for Hastebin {
    async fn post(&self, text: &str) -> Result<String, PostingError> {
        let url = format!("{}/documents", &self.url);
        info!("post {} bytes to hastebin", text.len());
        debug!("request POST {}", &url);

        let request = self.client.post(&url).body(text.to_owned());
        let body = read_text(send_post(request).await?).await?;

        let document: DocumentResponse = match serde_json::from_str(&body) {
            Ok(document) => document,
            Err(e) => {
                error!("invalid hastebin response {}: {}", body, e);
                return Err(PostingError::with_cause(
                    "Could not parse response from Hastebin!",
                    e,
                ));
            }
        };

        debug!("response from {} -> {:?}", &url, &document);

        match document.key {
            Some(key) => Ok(format!("{}{}", HASTEBIN_DOCUMENT_BASE, key)),
            None => {
                error!("invalid hastebin result {}", body);
                Err(PostingError::new(
                    "Hastebin result did not contain expected URL base.",
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::paste::backends::build_client;

    fn create_hastebin(url: &str) -> Hastebin {
        Hastebin::new(build_client(Duration::from_secs(5)).unwrap(), url)
    }

    #[tokio::test]
    async fn test_post_builds_document_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/documents")
            .match_body("hi")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"key":"xyz"}"#)
            .create_async()
            .await;

        let hastebin = create_hastebin(&format!("{}/", server.url()));
        let url = hastebin.post("hi").await.unwrap();

        assert_eq!(url, "https://hastebin.com/xyz");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_non_json_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/documents")
            .with_status(200)
            .with_body("<html>rate limited</html>")
            .create_async()
            .await;

        let hastebin = create_hastebin(&server.url());
        let error = hastebin.post("hi").await.unwrap_err();

        assert_eq!(error.message(), "Could not parse response from Hastebin!");
        assert!(error.cause().is_some());
    }

    #[tokio::test]
    async fn test_post_missing_key() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/documents")
            .with_status(200)
            .with_body(r#"{"message":"Document exceeds maximum length."}"#)
            .create_async()
            .await;

        let hastebin = create_hastebin(&server.url());
        let error = hastebin.post("hi").await.unwrap_err();

        assert_eq!(
            error.message(),
            "Hastebin result did not contain expected URL base."
        );
    }

    #[tokio::test]
    async fn test_post_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/documents")
            .with_status(502)
            .create_async()
            .await;

        let hastebin = create_hastebin(&server.url());
        let error = hastebin.post("hi").await.unwrap_err();

        assert_eq!(error.message(), "Could not communicate with remote service");
    }
}
