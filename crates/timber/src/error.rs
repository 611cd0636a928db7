//! Error types for the timber backend

/// Result type for timber operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring timber
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The global dispatcher was already installed
    #[error("a global dispatcher has already been installed")]
    DispatcherAlreadySet,

    /// A level name could not be parsed
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configuration could not be parsed as TOML
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}
