//! Query parameter sets with bracket-notation nesting.
//!
//! A [`QueryParameters`] value is an insertion-ordered map whose values are
//! either plain strings or further parameter sets. It converts to and from
//! query strings of the `a=1&b%5Bc%5D=2` shape.

mod build;
mod merge;
mod parse;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Scalar(String),
    Nested(QueryParameters),
}

impl QueryValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::Scalar(s) => Some(s),
            QueryValue::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&QueryParameters> {
        match self {
            QueryValue::Scalar(_) => None,
            QueryValue::Nested(params) => Some(params),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Scalar(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Scalar(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Scalar(value.to_string())
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        QueryValue::Scalar(value.to_string())
    }
}

/// Booleans encode as `1` / `0`.
impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Scalar(if value { "1" } else { "0" }.to_string())
    }
}

impl From<QueryParameters> for QueryValue {
    fn from(value: QueryParameters) -> Self {
        QueryValue::Nested(value)
    }
}

/// Ordered set of query parameters.
///
/// Equality compares contents, not order; use [`QueryParameters::iter`] when
/// order matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParameters(IndexMap<String, QueryValue>);

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    /// Inserts or replaces `key`. A replaced key keeps its position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<QueryValue>,
    ) -> Option<QueryValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Index used for `name[]=` appends: one past the largest integer key.
    fn next_index(&self) -> i64 {
        self.0
            .keys()
            .filter_map(|k| integer_key(k))
            .map(|n| n.saturating_add(1))
            .max()
            .unwrap_or(0)
            .max(0)
    }
}

/// Parses keys written in canonical decimal form (`"7"`, `"-3"`, not `"07"`).
fn integer_key(key: &str) -> Option<i64> {
    let n: i64 = key.parse().ok()?;
    (n.to_string() == key).then_some(n)
}

impl<K, V> FromIterator<(K, V)> for QueryParameters
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParameters::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl std::fmt::Display for QueryParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_position_on_replace() {
        let mut params = QueryParameters::new();
        params.insert("a", "1");
        params.insert("b", "2");
        let old = params.insert("a", "3");
        assert_eq!(old, Some(QueryValue::from("1")));
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(params.get("a").and_then(QueryValue::as_str), Some("3"));
    }

    #[test]
    fn next_index_follows_largest_integer_key() {
        let mut params = QueryParameters::new();
        assert_eq!(params.next_index(), 0);
        params.insert("x", "a");
        params.insert("4", "b");
        params.insert("07", "c");
        assert_eq!(params.next_index(), 5);
        let negative: QueryParameters = [("-3", "z")].into_iter().collect();
        assert_eq!(negative.next_index(), 0);
    }

    #[test]
    fn scalar_conversions() {
        assert_eq!(QueryValue::from(true).as_str(), Some("1"));
        assert_eq!(QueryValue::from(false).as_str(), Some("0"));
        assert_eq!(QueryValue::from(-12i64).as_str(), Some("-12"));
        assert_eq!(QueryValue::from(42u64).as_str(), Some("42"));
    }

    #[test]
    fn deserializes_from_json_object() {
        let params: QueryParameters =
            serde_json::from_str(r#"{"page":"2","filter":{"tag":"rust"}}"#).unwrap();
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["page", "filter"]);
        let filter = params.get("filter").and_then(QueryValue::as_nested).unwrap();
        assert_eq!(filter.get("tag").and_then(QueryValue::as_str), Some("rust"));
    }
}
