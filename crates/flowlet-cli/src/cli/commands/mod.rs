//! CLI command handlers. Each returns the text to print.

mod default_port;
mod query;
mod relative_path;
mod routes;
mod user_info;

pub use default_port::run_default_port;
pub use query::{run_add_query, run_with_query};
pub use relative_path::run_relative_path;
pub use routes::run_routes;
pub use user_info::{run_password, run_username};

use anyhow::{Context, Result};
use flowlet_core::config::{self, FlowletConfig};
use std::path::Path;
use url::Url;

fn parse_uri(s: &str) -> Result<Url> {
    Url::parse(s).with_context(|| format!("invalid URI: {s}"))
}

/// Loads `path` if given, otherwise the XDG config (created on first use).
fn load_config(path: Option<&Path>) -> Result<FlowletConfig> {
    let cfg = match path {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}
