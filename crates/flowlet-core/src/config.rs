use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::routing::{ConfigurationRoutesProviderFactory, RoutesProviderOptions};

/// Route provider wiring (optional `[routing]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Name of the registered factory used to build the routes provider.
    #[serde(default = "default_factory")]
    pub factory: String,
    /// Options handed to the factory as-is.
    #[serde(default)]
    pub options: toml::Table,
}

fn default_factory() -> String {
    ConfigurationRoutesProviderFactory::NAME.to_string()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            factory: default_factory(),
            options: toml::Table::new(),
        }
    }
}

impl RoutingConfig {
    /// Converts the TOML options table into factory options.
    pub fn provider_options(&self) -> Result<RoutesProviderOptions> {
        match serde_json::to_value(&self.options).context("convert routing options")? {
            serde_json::Value::Object(map) => Ok(map),
            other => anyhow::bail!("routing options must be a table, got {other}"),
        }
    }
}

/// Global configuration loaded from `~/.config/flowlet/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowletConfig {
    /// Base URI used by `relative-path` when none is given on the command line.
    #[serde(default)]
    pub base_uri: Option<String>,
    #[serde(default)]
    pub routing: RoutingConfig,
}

impl FlowletConfig {
    /// Parsed `base_uri`, if configured.
    pub fn base_uri(&self) -> Result<Option<Url>> {
        self.base_uri
            .as_deref()
            .map(|s| Url::parse(s).with_context(|| format!("invalid base_uri in config: {s}")))
            .transpose()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("flowlet")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FlowletConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FlowletConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path; the file must exist.
pub fn load_from(path: &Path) -> Result<FlowletConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: FlowletConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
