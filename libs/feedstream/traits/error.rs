use thiserror::Error;

/// Main error type for feedstream
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// The envelope source failed; fatal to the stream
    #[error("Source error: {0}")]
    Source(String),

    /// The source connection ended unexpectedly
    #[error("Connection closed: {0}")]
    ConnectionClosed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A decode worker panicked or was cancelled
    #[error("Decode worker failed: {0}")]
    Worker(String),
}

/// Result type for feedstream operations
pub type Result<T> = std::result::Result<T, StreamError>;
