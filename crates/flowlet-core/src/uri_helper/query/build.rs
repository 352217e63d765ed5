//! Query string serialization.

use url::form_urlencoded;

use super::{QueryParameters, QueryValue};

impl QueryParameters {
    /// Serializes the set as `key=value` pairs joined by `&`.
    ///
    /// Nested sets use bracket notation with encoded brackets
    /// (`a%5Bb%5D=1`); empty nested sets produce no pairs.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        collect_pairs(self, None, &mut pairs);
        pairs.join("&")
    }
}

fn collect_pairs(params: &QueryParameters, prefix: Option<&str>, pairs: &mut Vec<String>) {
    for (key, value) in params.iter() {
        let encoded = encode(key);
        let name = match prefix {
            Some(prefix) => format!("{prefix}%5B{encoded}%5D"),
            None => encoded,
        };
        match value {
            QueryValue::Scalar(v) => pairs.push(format!("{name}={}", encode(v))),
            QueryValue::Nested(inner) => collect_pairs(inner, Some(&name), pairs),
        }
    }
}

/// Form-encodes `s`; `*` is escaped as well so only `-._` survive unencoded.
fn encode(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('*', "%2A")
}
