use thiserror::Error;

/// Error type covering validation and configuration failures.
///
/// Lookup misses and borrowing rejections are not errors; they are reported
/// through [`crate::BorrowOutcome`], [`crate::ReturnOutcome`] or `Option`.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Name can't be empty.")]
    InvalidName,
    #[error("Title can't be empty.")]
    InvalidTitle,
    #[error("Periodicals require an issue date.")]
    MissingIssueDate,
    #[error("Unknown item type: {0}")]
    UnknownItemVariant(String),
    #[error("No configuration directory available on this platform")]
    ConfigDirUnavailable,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type LibraryResult<T> = Result<T, LibraryError>;
