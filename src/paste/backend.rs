//! The capability shared by every pastebin service.

use async_trait::async_trait;
use mockall::automock;

use crate::paste::PostingError;

/// A remote text-hosting service.
///
/// Implementations build their own request (form field, multipart upload, raw
/// body or raw socket framing), perform a single network exchange bounded by a
/// finite timeout, and parse the service-specific response into a URL.
///
/// Any transport or parsing failure is converted to a [`PostingError`] before
/// leaving the implementation.
#[automock]
#[async_trait]
pub trait Backend: Send + Sync {
    /// Posts `text` and returns the URL of the created paste.
    async fn post(&self, text: &str) -> Result<String, PostingError>;
}
