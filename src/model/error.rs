use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Errors raised while executing a harvest tick.
#[derive(Error, Debug)]
pub enum HarvestError {
    /// Network or HTTP failure reaching the upstream API
    #[error("Transport error: {0}")]
    Transport(String),

    /// Unexpected shape of the upstream response
    #[error("Format error: {0}")]
    Format(String),

    /// Write failure against the relational or document store
    #[error("Store error: {0}")]
    Store(String),
}
