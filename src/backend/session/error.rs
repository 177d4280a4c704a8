use thiserror::Error;

/// Failures of the session lifecycle. None of them are fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Login was attempted before the stored session finished restoring.
    #[error("session is still being restored")]
    NotReady,
}

/// Required form fields left blank.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required credentials: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("missing registration fields: {}", .0.join(", "))]
    MissingProfile(Vec<&'static str>),
}

/// Failures of the storage collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not serialize session: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}
