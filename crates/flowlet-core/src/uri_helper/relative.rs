//! Path of a URI relative to a base URI.

use url::Url;

/// Returns the path of `uri` relative to `base`.
///
/// The check is a literal prefix match on the serialized URIs, without any
/// normalization. On a match, as many bytes as `base.path()` has are cut
/// from the front of `uri.path()`; this is not path-aware, so a base of
/// `http://x/ab` against `http://x/abc` yields `"c"`.
pub fn relative_path(base: &Url, uri: &Url) -> String {
    let base_str = base.as_str();
    if base_str.is_empty() || !uri.as_str().starts_with(base_str) {
        return String::new();
    }

    uri.path()
        .get(base.path().len()..)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn strips_base_path() {
        assert_eq!(relative_path(&url("http://x/a"), &url("http://x/a/b")), "/b");
        assert_eq!(
            relative_path(&url("https://example.com/app/"), &url("https://example.com/app/users/7")),
            "users/7"
        );
    }

    #[test]
    fn different_authority_is_not_relative() {
        assert_eq!(relative_path(&url("http://x/a"), &url("http://y/a/b")), "");
        assert_eq!(relative_path(&url("http://x/a"), &url("https://x/a/b")), "");
        assert_eq!(relative_path(&url("http://x:8080/a"), &url("http://x/a/b")), "");
    }

    #[test]
    fn same_uri_is_empty() {
        assert_eq!(relative_path(&url("http://x/a/b"), &url("http://x/a/b")), "");
    }

    #[test]
    fn prefix_match_is_not_path_aware() {
        assert_eq!(relative_path(&url("http://x/ab"), &url("http://x/abc")), "c");
    }

    #[test]
    fn no_normalization_applied() {
        // Same resource, different spelling of the base.
        assert_eq!(relative_path(&url("http://x/a/?"), &url("http://x/a/b")), "");
    }

    #[test]
    fn base_query_must_match_too() {
        let base = url("http://x/a?lang=en");
        assert_eq!(relative_path(&base, &url("http://x/a?lang=en&page=2")), "");
        assert_eq!(relative_path(&base, &url("http://x/a/b?lang=en")), "");
    }
}
