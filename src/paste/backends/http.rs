//! Shared HTTP plumbing for the HTTP based backends.

use std::time::Duration;

use log::{debug, error};
use reqwest::{Client, RequestBuilder, Response};

use crate::paste::{ConfigurationError, PostingError};

/// Message shown when the remote service could not be reached.
pub(crate) const COMMUNICATION_ERROR: &str = "Could not communicate with remote service";

/// Builds the HTTP client shared by all HTTP backends.
///
/// Both the connection and the whole request are bounded by `timeout`.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, ConfigurationError> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(concat!("helpbin/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ConfigurationError::HttpClient)
}

/// Sends a POST request and fails on transport errors or non-2xx statuses.
///
/// Every reqwest error is logged here and flattened into a generic
/// [`PostingError`]. Inspecting the body is left to the caller.
pub(crate) async fn send_post(request: RequestBuilder) -> Result<Response, PostingError> {
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            error!("error during POST request: {}", e);
            return Err(PostingError::with_cause(COMMUNICATION_ERROR, e));
        }
    };

    debug!("POST {} -> {}", response.url(), response.status());

    response.error_for_status().map_err(|e| {
        error!("error during POST request: {}", e);
        PostingError::with_cause(COMMUNICATION_ERROR, e)
    })
}

/// Reads the response body as text.
pub(crate) async fn read_text(response: Response) -> Result<String, PostingError> {
    response.text().await.map_err(|e| {
        error!("unable to read POST response body: {}", e);
        PostingError::with_cause(COMMUNICATION_ERROR, e)
    })
}
