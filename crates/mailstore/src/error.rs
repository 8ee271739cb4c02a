//! Error types for message store operations

/// Errors raised while talking to the email API
///
/// `MessageStore::load` and `MessageStore::create` log and swallow these;
/// the `try_*` variants hand them back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The base address or an endpoint could not be resolved
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request never produced a response (DNS, connect, I/O)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("Server responded with status {0}")]
    Status(u16),

    /// The response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The blocking worker running the request panicked or was cancelled
    #[error("Background request task failed: {0}")]
    Task(String),
}

impl From<ureq::Error> for StoreError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => StoreError::Status(code),
            other => StoreError::Transport(other.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for StoreError {
    fn from(err: tokio::task::JoinError) -> Self {
        StoreError::Task(err.to_string())
    }
}

/// Result alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
