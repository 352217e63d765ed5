//! Property test: building then parsing a parameter set preserves order and nesting.

use flowlet_core::uri_helper::{QueryParameters, QueryValue};
use proptest::prelude::*;

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}"
}

fn params() -> impl Strategy<Value = QueryParameters> {
    let leaf = any::<String>().prop_map(QueryValue::Scalar);
    let value = leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec((key(), inner), 1..4)
            .prop_map(|pairs| QueryValue::Nested(pairs.into_iter().collect()))
    });
    prop::collection::vec((key(), value), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect::<QueryParameters>())
}

fn ordered(params: &QueryParameters) -> Vec<(String, Option<String>)> {
    let mut out = Vec::new();
    flatten(params, "", &mut out);
    out
}

fn flatten(params: &QueryParameters, prefix: &str, out: &mut Vec<(String, Option<String>)>) {
    for (key, value) in params.iter() {
        let path = format!("{prefix}/{key}");
        match value {
            QueryValue::Scalar(s) => out.push((path, Some(s.clone()))),
            QueryValue::Nested(inner) => {
                out.push((path.clone(), None));
                flatten(inner, &path, out);
            }
        }
    }
}

proptest! {
    #[test]
    fn parse_after_build_preserves_order_and_nesting(p in params()) {
        let query = p.to_query_string();
        let parsed = QueryParameters::parse(&query);
        prop_assert_eq!(ordered(&parsed), ordered(&p));
    }

    #[test]
    fn parse_never_panics(s in any::<String>()) {
        let parsed = QueryParameters::parse(&s);
        let _ = parsed.to_query_string();
    }
}
