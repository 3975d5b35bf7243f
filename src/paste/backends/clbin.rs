//! [clbin](https://clbin.com) backend.

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;

use crate::paste::{
    Backend, PostingError,
    backends::http::{read_text, send_post},
};

/// Live clbin endpoint.
pub const CLBIN_URL: &str = "https://clbin.com/";
/// Every successful clbin response contains this URL base.
const CLBIN_URL_BASE: &str = "https://clbin.com/";

/// Posts text as the `clbin` form field.
///
/// clbin answers with the paste URL in plain text. The body is returned as is,
/// trailing newline included.
pub struct Clbin {
    /// Shared HTTP client
    client: Client,
    /// Endpoint receiving the form
    url: String,
}

impl Clbin {
    /// Create a new [Clbin] posting to `url`.
    pub fn new(client: Client, url: &str) -> Self {
        Clbin {
            client,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl Backend for Clbin {
    async fn post(&self, text: &str) -> Result<String, PostingError> {
        info!("post {} bytes to clbin", text.len());
        debug!("request POST {}", &self.url);

        let request = self.client.post(&self.url).form(&[("clbin", text)]);
        let result = read_text(send_post(request).await?).await?;

        if result.contains(CLBIN_URL_BASE) {
            debug!("response from {} -> {}", &self.url, &result);
            Ok(result)
        } else {
            error!("invalid clbin result {}", result);
            Err(PostingError::new(
                "clbin result did not contain expected URL base.",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockito::Matcher;

    use super::*;
    use crate::paste::backends::build_client;

    fn create_clbin(url: &str) -> Clbin {
        Clbin::new(build_client(Duration::from_secs(5)).unwrap(), url)
    }

    #[tokio::test]
    async fn test_post_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::UrlEncoded("clbin".to_owned(), "hello".to_owned()))
            .with_status(200)
            .with_body("https://clbin.com/abcd")
            .create_async()
            .await;

        let clbin = create_clbin(&format!("{}/", server.url()));
        let url = clbin.post("hello").await.unwrap();

        assert_eq!(url, "https://clbin.com/abcd");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_keeps_trailing_newline() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body("https://clbin.com/abcd\n")
            .create_async()
            .await;

        let clbin = create_clbin(&server.url());
        assert_eq!(clbin.post("hello").await.unwrap(), "https://clbin.com/abcd\n");
    }

    #[tokio::test]
    async fn test_post_unexpected_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body("error: too big")
            .create_async()
            .await;

        let clbin = create_clbin(&server.url());
        let error = clbin.post("hello").await.unwrap_err();

        assert_eq!(
            error.message(),
            "clbin result did not contain expected URL base."
        );
    }

    #[tokio::test]
    async fn test_post_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(500)
            .create_async()
            .await;

        let clbin = create_clbin(&server.url());
        let error = clbin.post("hello").await.unwrap_err();

        assert_eq!(error.message(), "Could not communicate with remote service");
    }

    #[tokio::test]
    async fn test_post_empty_text_is_sent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::UrlEncoded("clbin".to_owned(), "".to_owned()))
            .with_status(200)
            .with_body("https://clbin.com/empty")
            .create_async()
            .await;

        let clbin = create_clbin(&server.url());
        assert_eq!(clbin.post("").await.unwrap(), "https://clbin.com/empty");
        mock.assert_async().await;
    }
}
