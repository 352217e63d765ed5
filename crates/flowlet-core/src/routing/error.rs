/// Errors raised while wiring route providers.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("no routes provider factory registered under {0:?}")]
    UnknownFactory(String),

    #[error("invalid options for routes provider factory {factory:?}: {reason}")]
    InvalidOptions { factory: String, reason: String },
}
