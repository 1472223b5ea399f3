// Shared error types for the adapter

/// Errors that can occur while executing a search pass
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("no credentials got returned")]
    NoCredentials,

    #[error("search request failed: {0}")]
    RequestFailed(String),

    #[error("failed to parse search response: {0}")]
    ParseError(String),
}

pub type AdapterResult<T> = std::result::Result<T, AdapterError>;
