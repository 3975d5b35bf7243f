//! Publishing text to remote pastebin services.
//!
//! This module turns a piece of text into a shareable URL by handing it to one of
//! several remote text-hosting services. Each service speaks its own protocol, so
//! the boundary is deliberately narrow: text in, URL or [`PostingError`] out.
//!
//! # Modules
//!
//! - `backend` - The [`Backend`] capability shared by every service
//! - `backends` - One implementation per remote service (clbin, 0x0, hastebin, termbin)
//! - `registry` - The immutable name to backend mapping built at startup
//! - `poster` - The [`Poster`] entry point used by the bot commands
//!
//! # Examples
//!
//! ```no_run
//! use helpbin::config::PasteSection;
//! use helpbin::paste::{BackendRegistry, Poster};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = BackendRegistry::with_defaults(&PasteSection::default())?;
//! let poster = Poster::new(registry);
//!
//! let url = poster.post("termbin", "hello world").await?;
//! println!("posted at {}", url);
//! # Ok(())
//! # }
//! ```

mod backend;
mod backends;
mod poster;
mod registry;

use std::error::Error as StdError;

use thiserror::Error;

pub use crate::paste::backend::Backend;
#[cfg(test)]
pub use crate::paste::backend::MockBackend;
pub use crate::paste::backends::{
    CLBIN_URL, Clbin, HASTEBIN_URL, Hastebin, TERMBIN_HOST, TERMBIN_PORT, TERMBIN_TIMEOUT, Termbin,
    ZERO_X0_URL, ZeroX0,
};
pub use crate::paste::poster::Poster;
pub use crate::paste::registry::{BackendRegistry, RegistryBuilder};

/// Boxed underlying cause kept for logging purposes.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Failure of a single posting attempt.
///
/// The message is generic and safe to show to end users. The underlying
/// cause (HTTP, JSON or socket error) is only reachable through
/// [`std::error::Error::source`] and is meant for the logs.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PostingError {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl PostingError {
    /// Creates an error without any underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        PostingError {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates an error wrapping the transport-level cause.
    pub fn with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        PostingError {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// User-safe description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Underlying cause, if any.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

/// Operator errors raised while building or querying the backend registry.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The requested backend name is not registered.
    #[error("unknown pastebin backend `{0}`")]
    UnknownBackend(String),
    /// A backend name was registered twice.
    #[error("pastebin backend `{0}` is already registered")]
    DuplicateBackend(String),
    /// The shared HTTP client could not be built.
    #[error("unable to build the HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

/// Everything [`Poster::post`] may fail with.
#[derive(Debug, Error)]
pub enum PostError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Posting(#[from] PostingError),
}

/// Renders an error and all of its sources on one line, for logging.
pub(crate) fn error_chain(error: &dyn StdError) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_error_display_hides_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let error = PostingError::with_cause("Error uploading to termbin", io);

        assert_eq!(error.to_string(), "Error uploading to termbin");
        assert_eq!(error.message(), "Error uploading to termbin");
        assert_eq!(error.cause().unwrap().to_string(), "refused");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_posting_error_without_cause() {
        let error = PostingError::new("clbin result did not contain expected URL base.");
        assert!(error.cause().is_none());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_chain_includes_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let error = PostError::from(PostingError::with_cause("Error uploading to termbin", io));
        assert_eq!(error_chain(&error), "Error uploading to termbin: timed out");
    }

    #[test]
    fn test_configuration_error_display() {
        let error = ConfigurationError::UnknownBackend("pastie".to_string());
        assert_eq!(error.to_string(), "unknown pastebin backend `pastie`");
    }
}
