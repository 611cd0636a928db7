//! Error types for installing the bridge

use thiserror::Error;

/// Errors that can occur while registering the bridge with a facade
#[derive(Debug, Error)]
pub enum Error {
    /// Another `log` logger was registered first
    #[error("failed to install log bridge: {0}")]
    SetLogger(#[from] log::SetLoggerError),

    /// Another global tracing subscriber was registered first
    #[error("failed to install tracing bridge: {0}")]
    SetSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
