use thiserror::Error;
use uuid::Uuid;

use crate::storage::RepositoryError;

/// Errors surfaced to callers of the wishlist service.
///
/// Cache failures never appear here: the cache layer degrades to a miss
/// instead of failing the request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WishError {
    #[error("Wish not found with id: {0}")]
    NotFound(Uuid),
    #[error("You are not authorized to access these wishes")]
    Unauthorized,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Result type for wishlist service operations.
pub type Result<T> = std::result::Result<T, WishError>;

/// Maps a [`WishError`] to an HTTP status code.
pub fn wish_error_to_status_code(error: &WishError) -> u16 {
    match error {
        WishError::NotFound(_) => 404,
        WishError::Unauthorized => 403,
        WishError::InvalidRequest(_) => 400,
        WishError::Storage(err) => crate::storage::repository_error_to_status_code(err),
    }
}
