//! Name to backend mapping.
//!
//! The registry is assembled once through a [`RegistryBuilder`] and is read-only
//! afterwards, so it can be shared between concurrent requests without locking.

use log::debug;

use crate::{
    config::PasteSection,
    paste::{
        Backend, ConfigurationError,
        backends::{Clbin, Hastebin, Termbin, ZeroX0, build_client},
    },
};

/// Immutable, ordered set of named backends.
///
/// # Examples
///
/// ```no_run
/// use helpbin::config::PasteSection;
/// use helpbin::paste::BackendRegistry;
///
/// let registry = BackendRegistry::with_defaults(&PasteSection::default()).unwrap();
/// assert_eq!(registry.names(), vec!["clbin", "0x0", "hastebin", "termbin"]);
/// ```
pub struct BackendRegistry {
    /// Backends in registration order
    backends: Vec<(String, Box<dyn Backend>)>,
}

/// Collects backends before freezing them into a [`BackendRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    backends: Vec<(String, Box<dyn Backend>)>,
}

impl RegistryBuilder {
    /// Registers `backend` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateBackend`] if `name` is already taken.
    pub fn register(
        mut self,
        name: &str,
        backend: impl Backend + 'static,
    ) -> Result<Self, ConfigurationError> {
        if self.backends.iter().any(|(known, _)| known == name) {
            return Err(ConfigurationError::DuplicateBackend(name.to_string()));
        }

        debug!("register pastebin backend {}", name);
        let backend: Box<dyn Backend> = Box::new(backend);
        self.backends.push((name.to_string(), backend));
        Ok(self)
    }

    /// Freezes the registered backends.
    pub fn build(self) -> BackendRegistry {
        BackendRegistry {
            backends: self.backends,
        }
    }
}

impl BackendRegistry {
    /// Starts an empty registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registers the four supported services, in this order: clbin, 0x0,
    /// hastebin and termbin.
    ///
    /// Endpoints and the timeout come from `settings`. All HTTP backends share
    /// one client.
    pub fn with_defaults(settings: &PasteSection) -> Result<Self, ConfigurationError> {
        let timeout = settings.timeout();
        let client = build_client(timeout)?;

        Ok(Self::builder()
            .register("clbin", Clbin::new(client.clone(), &settings.clbin_url))?
            .register("0x0", ZeroX0::new(client.clone(), &settings.zero_x0_url))?
            .register("hastebin", Hastebin::new(client, &settings.hastebin_url))?
            .register(
                "termbin",
                Termbin::new(&settings.termbin_host, settings.termbin_port, timeout),
            )?
            .build())
    }

    /// Looks up the backend registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownBackend`] for unregistered names.
    pub fn resolve(&self, name: &str) -> Result<&dyn Backend, ConfigurationError> {
        self.backends
            .iter()
            .find(|(known, _)| known == name)
            .map(|(_, backend)| backend.as_ref())
            .ok_or_else(|| ConfigurationError::UnknownBackend(name.to_string()))
    }

    /// Names of the registered backends, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.backends.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paste::MockBackend;

    fn mock_returning(url: &'static str) -> MockBackend {
        let mut backend = MockBackend::new();
        backend
            .expect_post()
            .returning(move |_| Ok(url.to_string()));
        backend
    }

    #[test]
    fn test_default_names_are_ordered() {
        let registry = BackendRegistry::with_defaults(&PasteSection::default()).unwrap();
        assert_eq!(
            registry.names(),
            vec!["clbin", "0x0", "hastebin", "termbin"]
        );
    }

    #[test]
    fn test_resolve_every_default_backend() {
        let registry = BackendRegistry::with_defaults(&PasteSection::default()).unwrap();
        for name in registry.names() {
            assert!(registry.resolve(name).is_ok(), "{} should resolve", name);
        }
    }

    #[test]
    fn test_resolve_unknown_backend() {
        let registry = BackendRegistry::with_defaults(&PasteSection::default()).unwrap();
        let result = registry.resolve("pastie");
        assert!(matches!(
            result,
            Err(ConfigurationError::UnknownBackend(name)) if name == "pastie"
        ));
        assert!(!registry.contains("pastie"));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = BackendRegistry::with_defaults(&PasteSection::default()).unwrap();
        assert!(registry.resolve("Clbin").is_err());
    }

    #[test]
    fn test_register_duplicate_name() {
        let result = BackendRegistry::builder()
            .register("stub", MockBackend::new())
            .unwrap()
            .register("stub", MockBackend::new());
        assert!(matches!(
            result,
            Err(ConfigurationError::DuplicateBackend(name)) if name == "stub"
        ));
    }

    #[tokio::test]
    async fn test_resolve_returns_registered_backend() {
        let registry = BackendRegistry::builder()
            .register("first", mock_returning("https://first/1"))
            .unwrap()
            .register("second", mock_returning("https://second/1"))
            .unwrap()
            .build();

        assert_eq!(registry.names(), vec!["first", "second"]);
        let url = registry.resolve("second").unwrap().post("x").await.unwrap();
        assert_eq!(url, "https://second/1");
    }

    #[test]
    fn test_empty_registry() {
        let registry = BackendRegistry::builder().build();
        assert!(registry.names().is_empty());
        assert!(registry.resolve("clbin").is_err());
    }
}
