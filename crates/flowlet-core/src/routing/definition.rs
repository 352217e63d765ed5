//! Route definition data as handed out by providers.

use serde::{Deserialize, Serialize};

/// One route as declared in configuration.
///
/// This is plain data; matching a request against `uri_pattern` is the
/// routing engine's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDefinition {
    #[serde(default)]
    pub name: Option<String>,
    pub uri_pattern: String,
    #[serde(default)]
    pub defaults: serde_json::Map<String, serde_json::Value>,
    /// Empty means any method.
    #[serde(default)]
    pub http_methods: Vec<String>,
    #[serde(default)]
    pub append_exceeding_arguments: bool,
}
