//! Unified entry point for posting text.

use log::{error, info};

use crate::paste::{BackendRegistry, PostError, error_chain};

/// Posts text to a backend selected by name.
///
/// One backend, one attempt per call: there is neither retry nor fallback to
/// another backend. Every call opens its own connection, so concurrent posts
/// are independent of each other.
///
/// # Examples
///
/// ```no_run
/// use helpbin::config::PasteSection;
/// use helpbin::paste::{BackendRegistry, Poster};
///
/// # async fn example() {
/// let registry = BackendRegistry::with_defaults(&PasteSection::default()).unwrap();
/// let poster = Poster::new(registry);
///
/// match poster.post("clbin", "hello").await {
///     Ok(url) => println!("posted at {}", url),
///     Err(e) => println!("{}", e),
/// }
/// # }
/// ```
pub struct Poster {
    registry: BackendRegistry,
}

impl Poster {
    /// Create a new [Poster] owning `registry`.
    pub fn new(registry: BackendRegistry) -> Self {
        Poster { registry }
    }

    /// Posts `text` to the backend registered as `backend` and returns the paste URL.
    ///
    /// # Errors
    ///
    /// - [`PostError::Configuration`] if `backend` is not registered
    /// - [`PostError::Posting`] if the remote service failed; its message is
    ///   safe to show to users, the cause has already been logged
    pub async fn post(&self, backend: &str, text: &str) -> Result<String, PostError> {
        let resolved = match self.registry.resolve(backend) {
            Ok(resolved) => resolved,
            Err(e) => {
                error!("cannot post: {}", e);
                return Err(e.into());
            }
        };

        info!("posting {} bytes to {}", text.len(), backend);

        match resolved.post(text).await {
            Ok(url) => {
                info!("posted to {} at {}", backend, url.trim_end());
                Ok(url)
            }
            Err(e) => {
                error!("posting to {} failed: {}", backend, error_chain(&e));
                Err(e.into())
            }
        }
    }

    /// Names of the available backends, in registration order.
    pub fn backend_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    /// The registry this poster dispatches to.
    pub fn registry(&self) -> &BackendRegistry {
        &self.registry
    }
}
