//! Named registry of route provider factories.

use std::sync::Arc;

use anyhow::Result;
use indexmap::IndexMap;

use super::{
    ConfigurationRoutesProviderFactory, RoutesProvider, RoutesProviderFactory,
    RoutesProviderOptions, RoutingError,
};

/// Maps factory names to factories, in registration order.
#[derive(Default, Clone)]
pub struct RoutesProviderFactoryRegistry {
    factories: IndexMap<String, Arc<dyn RoutesProviderFactory>>,
}

impl RoutesProviderFactoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in `configuration` factory.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(
            ConfigurationRoutesProviderFactory::NAME,
            Arc::new(ConfigurationRoutesProviderFactory),
        );
        registry
    }

    /// Registers `factory` under `name`, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, factory: Arc<dyn RoutesProviderFactory>) {
        let name = name.into();
        tracing::debug!("registering routes provider factory {}", name);
        self.factories.insert(name, factory);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn RoutesProviderFactory>> {
        self.factories.get(name).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Builds a provider with the factory registered under `name`.
    pub fn create(
        &self,
        name: &str,
        options: &RoutesProviderOptions,
    ) -> Result<Box<dyn RoutesProvider>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RoutingError::UnknownFactory(name.to_string()))?;
        tracing::debug!("creating routes provider with factory {}", name);
        factory.create_routes_provider(options)
    }
}

impl std::fmt::Debug for RoutesProviderFactoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutesProviderFactoryRegistry")
            .field("factories", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
