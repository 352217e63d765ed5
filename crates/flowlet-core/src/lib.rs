pub mod config;
pub mod logging;

pub mod routing;
pub mod uri_helper;
