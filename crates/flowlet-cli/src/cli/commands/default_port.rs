//! `flowlet default-port`.

use flowlet_core::uri_helper;

pub fn run_default_port(scheme: &str) -> String {
    match uri_helper::default_port_for_scheme(scheme) {
        Some(port) => port.to_string(),
        None => "none".to_string(),
    }
}
