//! `flowlet relative-path` – path of a URI relative to a base.

use anyhow::Result;
use flowlet_core::uri_helper;
use std::path::Path;

use super::{load_config, parse_uri};

/// Uses `base` when given, otherwise `base_uri` from the config.
pub fn run_relative_path(uri: &str, base: Option<&str>, config: Option<&Path>) -> Result<String> {
    let uri = parse_uri(uri)?;
    let base = match base {
        Some(base) => parse_uri(base)?,
        None => load_config(config)?.base_uri()?.ok_or_else(|| {
            anyhow::anyhow!("no base URI: pass --base or set base_uri in the config file")
        })?,
    };
    Ok(uri_helper::relative_path(&base, &uri))
}
