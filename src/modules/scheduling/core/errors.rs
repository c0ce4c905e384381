use thiserror::Error;

/// Raised when a caller hands the scheduling core a malformed identifier or an
/// impossible range. The core never guesses a best-effort value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
