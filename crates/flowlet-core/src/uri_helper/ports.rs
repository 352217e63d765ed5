//! Well-known default ports by scheme.

/// Fixed scheme → port table, lower-case keys.
const DEFAULT_PORTS_BY_SCHEME: [(&str, u16); 11] = [
    ("http", 80),
    ("https", 443),
    ("ftp", 21),
    ("gopher", 70),
    ("nntp", 119),
    ("news", 119),
    ("telnet", 23),
    ("tn3270", 23),
    ("imap", 143),
    ("pop", 110),
    ("ldap", 389),
];

/// Looks up the default port for `scheme`, ignoring ASCII case.
///
/// Returns `None` for schemes not in the table.
pub fn default_port_for_scheme(scheme: &str) -> Option<u16> {
    DEFAULT_PORTS_BY_SCHEME
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(scheme))
        .map(|&(_, port)| port)
}
