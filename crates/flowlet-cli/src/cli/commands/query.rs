//! `flowlet with-query` / `flowlet add-query`.

use anyhow::Result;
use flowlet_core::uri_helper::{self, QueryParameters};

use super::parse_uri;

pub fn run_with_query(uri: &str, query: &str) -> Result<String> {
    let uri = parse_uri(uri)?;
    let params = QueryParameters::parse(query);
    tracing::debug!("replacing query of {} with {} parameters", uri, params.len());
    Ok(uri_helper::uri_with_query_parameters(&uri, &params).to_string())
}

pub fn run_add_query(uri: &str, query: &str) -> Result<String> {
    let uri = parse_uri(uri)?;
    let params = QueryParameters::parse(query);
    tracing::debug!("merging {} parameters into {}", params.len(), uri);
    Ok(uri_helper::uri_with_additional_query_parameters(&uri, &params).to_string())
}
