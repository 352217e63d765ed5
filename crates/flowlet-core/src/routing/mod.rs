//! Route provider factory contract.
//!
//! The routing engine itself lives elsewhere; this module only defines how
//! route providers are constructed from an options map, plus a
//! configuration-backed factory and a registry that wires factories by name.

mod configuration;
mod definition;
mod error;
mod registry;

pub use configuration::{ConfigurationRoutesProvider, ConfigurationRoutesProviderFactory};
pub use definition::RouteDefinition;
pub use error::RoutingError;
pub use registry::RoutesProviderFactoryRegistry;

/// Free-form factory options (string keys, arbitrary values).
pub type RoutesProviderOptions = serde_json::Map<String, serde_json::Value>;

/// Supplies route definitions to the dispatch layer.
pub trait RoutesProvider: Send + Sync {
    fn routes(&self) -> Vec<RouteDefinition>;
}

/// Builds a [`RoutesProvider`] from an options map.
///
/// What the options mean is up to each implementation; implementations are
/// free to reject options they cannot use.
pub trait RoutesProviderFactory: Send + Sync {
    fn create_routes_provider(
        &self,
        options: &RoutesProviderOptions,
    ) -> anyhow::Result<Box<dyn RoutesProvider>>;
}
