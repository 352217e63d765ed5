//! URI inspection and rewriting helpers.
//!
//! Every function here is pure: the input `Url` is only borrowed, and any
//! rewrite returns a fresh value. Malformed user-info or query strings
//! degrade to empty results instead of errors.

mod ports;
mod query;
mod relative;
mod user_info;

pub use ports::default_port_for_scheme;
pub use query::{QueryParameters, QueryValue};
pub use relative::relative_path;
pub use user_info::{password, username};

use std::borrow::Cow;
use url::Url;

/// Returns a copy of `uri` whose query is replaced by `params`.
///
/// Nested values use bracket notation (`a%5Bb%5D=1`) and pairs are joined
/// with `&`. An empty parameter set removes the query component.
pub fn uri_with_query_parameters(uri: &Url, params: &QueryParameters) -> Url {
    let query = params.to_query_string();
    let mut out = uri.clone();
    if query.is_empty() {
        out.set_query(None);
    } else {
        out.set_query(Some(query.as_str()));
    }
    out
}

/// Merges `params` recursively into the query already present on `uri`.
///
/// Values from `params` win on conflicts; keys that only exist in the current
/// query are kept. With an empty `params` the input is handed back borrowed.
pub fn uri_with_additional_query_parameters<'a>(
    uri: &'a Url,
    params: &QueryParameters,
) -> Cow<'a, Url> {
    if params.is_empty() {
        return Cow::Borrowed(uri);
    }

    let merged = match uri.query() {
        None | Some("") => params.clone(),
        Some(existing) => {
            let mut current = QueryParameters::parse(existing);
            current.merge_overrule(params);
            current
        }
    };

    Cow::Owned(uri_with_query_parameters(uri, &merged))
}
