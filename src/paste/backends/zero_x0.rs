//! [0x0.st](https://0x0.st) backend.

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::{
    Client,
    multipart::{Form, Part},
};

use crate::paste::{
    Backend, PostingError,
    backends::http::{COMMUNICATION_ERROR, read_text, send_post},
};

/// Live 0x0 endpoint.
pub const ZERO_X0_URL: &str = "https://0x0.st";
/// Every successful 0x0 response contains this URL base.
const ZERO_X0_URL_BASE: &str = "https://0x0.st";

/// Uploads text as a multipart `file` part.
pub struct ZeroX0 {
    /// Shared HTTP client
    client: Client,
    /// Endpoint receiving the upload
    url: String,
}

impl ZeroX0 {
    /// Create a new [ZeroX0] uploading to `url`.
    pub fn new(client: Client, url: &str) -> Self {
        ZeroX0 {
            client,
            url: url.to_string(),
        }
    }

    fn build_form(text: &str) -> Result<Form, PostingError> {
        let part = Part::text(text.to_owned())
            .file_name("file")
            .mime_str(mime::TEXT_PLAIN_UTF_8.as_ref())
            .map_err(|e| {
                error!("unable to build 0x0 upload: {}", e);
                PostingError::with_cause(COMMUNICATION_ERROR, e)
            })?;

        Ok(Form::new().part("file", part))
    }
}

#[async_trait]
impl Backend for ZeroX0 {
    async fn post(&self, text: &str) -> Result<String, PostingError> {
        info!("post {} bytes to 0x0", text.len());
        debug!("request POST {}", &self.url);

        let request = self.client.post(&self.url).multipart(Self::build_form(text)?);
        let result = read_text(send_post(request).await?).await?;

        if result.contains(ZERO_X0_URL_BASE) {
            debug!("response from {} -> {}", &self.url, &result);
            Ok(result)
        } else {
            error!("invalid 0x0 result {}", result);
            Err(PostingError::new(
                "0x0.st result did not contain expected URL base.",
            ))
        }
    }
}
