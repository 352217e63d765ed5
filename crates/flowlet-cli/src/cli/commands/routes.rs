//! `flowlet routes` – list routes from the configured provider.

use anyhow::Result;
use flowlet_core::routing::RoutesProviderFactoryRegistry;
use std::fmt::Write;
use std::path::Path;

use super::load_config;

pub fn run_routes(config: Option<&Path>, factory: Option<&str>) -> Result<String> {
    let cfg = load_config(config)?;
    let factory = factory.unwrap_or(&cfg.routing.factory);
    let options = cfg.routing.provider_options()?;

    let registry = RoutesProviderFactoryRegistry::with_defaults();
    let routes = registry.create(factory, &options)?.routes();

    if routes.is_empty() {
        return Ok("No routes configured.".to_string());
    }

    let mut out = format!("{:<16} {:<12} {}", "NAME", "METHODS", "PATTERN");
    for route in routes {
        let methods = if route.http_methods.is_empty() {
            "*".to_string()
        } else {
            route.http_methods.join(",")
        };
        write!(
            out,
            "\n{:<16} {:<12} {}",
            route.name.as_deref().unwrap_or("-"),
            methods,
            route.uri_pattern
        )?;
    }
    Ok(out)
}
