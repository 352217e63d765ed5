//! Factory that serves routes declared directly in its options.

use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;

use super::{
    RouteDefinition, RoutesProvider, RoutesProviderFactory, RoutesProviderOptions, RoutingError,
};

/// Options key holding the list of route definitions.
const ROUTES_KEY: &str = "routes";

/// Provider returning a fixed list of routes.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationRoutesProvider {
    routes: Vec<RouteDefinition>,
}

impl ConfigurationRoutesProvider {
    pub fn new(routes: Vec<RouteDefinition>) -> Self {
        Self { routes }
    }
}

impl RoutesProvider for ConfigurationRoutesProvider {
    fn routes(&self) -> Vec<RouteDefinition> {
        self.routes.clone()
    }
}

/// Reads `options["routes"]` as a list of [`RouteDefinition`]s.
///
/// A missing key yields a provider without routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigurationRoutesProviderFactory;

impl ConfigurationRoutesProviderFactory {
    pub const NAME: &'static str = "configuration";
}

impl RoutesProviderFactory for ConfigurationRoutesProviderFactory {
    fn create_routes_provider(
        &self,
        options: &RoutesProviderOptions,
    ) -> Result<Box<dyn RoutesProvider>> {
        let routes = match options.get(ROUTES_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => Vec::<RouteDefinition>::deserialize(value).map_err(|e| {
                RoutingError::InvalidOptions {
                    factory: Self::NAME.to_string(),
                    reason: format!("{ROUTES_KEY}: {e}"),
                }
            })?,
        };
        tracing::debug!("configuration routes provider created with {} routes", routes.len());
        Ok(Box::new(ConfigurationRoutesProvider::new(routes)))
    }
}
