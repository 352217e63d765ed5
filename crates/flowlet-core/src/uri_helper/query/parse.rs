//! Query string parsing with bracket-notation nesting.

use url::form_urlencoded;

use super::{QueryParameters, QueryValue};

/// Names nested deeper than this are dropped.
const MAX_NESTING_DEPTH: usize = 64;

/// Parsed parameter name: the base key plus one entry per `[...]` level.
/// `None` marks an append (`[]`).
struct ParamName {
    base: String,
    indices: Vec<Option<String>>,
}

impl QueryParameters {
    /// Parses a query string (without the leading `?`).
    ///
    /// `a[b]=1` nests, `a[]=1` appends with the next integer index, and later
    /// occurrences of a key overwrite earlier ones. Malformed input never
    /// fails; unusable pairs are skipped.
    pub fn parse(query: &str) -> Self {
        let mut params = QueryParameters::new();
        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            let Some(name) = split_name(&name) else {
                continue;
            };
            if name.indices.len() > MAX_NESTING_DEPTH {
                tracing::trace!(
                    "dropping query parameter {} nested {} levels deep",
                    name.base,
                    name.indices.len()
                );
                continue;
            }
            assign(&mut params, name.base, &name.indices, value.into_owned());
        }
        params
    }
}

fn split_name(raw: &str) -> Option<ParamName> {
    let raw = raw.trim_start_matches(' ');
    let (base_raw, brackets) = match raw.find('[') {
        Some(i) => (&raw[..i], Some(&raw[i..])),
        None => (raw, None),
    };
    if base_raw.is_empty() {
        return None;
    }

    let mut base: String = base_raw
        .chars()
        .map(|c| if c == ' ' || c == '.' { '_' } else { c })
        .collect();
    let mut indices = Vec::new();

    if let Some(mut rest) = brackets {
        // `rest` always starts with '[' here.
        loop {
            let Some(close) = rest.find(']') else {
                if indices.is_empty() {
                    base.push('_');
                    base.push_str(&rest[1..]);
                }
                break;
            };
            let index = &rest[1..close];
            indices.push((!index.is_empty()).then(|| index.to_string()));
            rest = &rest[close + 1..];
            if !rest.starts_with('[') {
                break;
            }
        }
    }

    Some(ParamName { base, indices })
}

fn assign(params: &mut QueryParameters, key: String, indices: &[Option<String>], value: String) {
    let Some((next, rest)) = indices.split_first() else {
        params.0.insert(key, QueryValue::Scalar(value));
        return;
    };

    let slot = params
        .0
        .entry(key)
        .or_insert_with(|| QueryValue::Nested(QueryParameters::new()));
    if let QueryValue::Scalar(_) = slot {
        *slot = QueryValue::Nested(QueryParameters::new());
    }
    if let QueryValue::Nested(inner) = slot {
        let next_key = next
            .clone()
            .unwrap_or_else(|| inner.next_index().to_string());
        assign(inner, next_key, rest, value);
    }
}
