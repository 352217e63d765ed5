//! Username/password extraction from the user-info component.

use url::Url;

/// Rebuilds the raw `user[:password]` component as it appears in the URI.
fn user_info(uri: &Url) -> String {
    match uri.password() {
        Some(password) => format!("{}:{}", uri.username(), password),
        None => uri.username().to_string(),
    }
}

/// Username part of the user-info component, or `""` when absent.
pub fn username(uri: &Url) -> String {
    user_info(uri).split(':').next().unwrap_or_default().to_string()
}

/// Password part of the user-info component, or `""` when absent.
///
/// The value is returned as it appears in the URI, i.e. still percent-encoded.
pub fn password(uri: &Url) -> String {
    user_info(uri).split(':').nth(1).unwrap_or_default().to_string()
}
