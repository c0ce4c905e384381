use thiserror::Error;

use crate::modules::scheduling::adapters::outbound::repositories::StoreError;
use crate::modules::scheduling::core::errors::CoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error("event not found: {0}")]
    NotFound(String),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("conflict: {0}")]
    Conflict(String),
}
