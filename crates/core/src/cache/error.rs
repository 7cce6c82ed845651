use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while talking to the backing store of cached views.
///
/// None of these ever reach an end user: callers degrade to a cache miss
/// or skip the eviction and log.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
    #[error("Cache operation timed out after {0:?}")]
    Timeout(Duration),
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
    #[error("Corrupted cache entry at {key}: {reason}")]
    Corrupted { key: String, reason: String },
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display() {
        let error = CacheError::Unavailable("connection refused".to_string());
        assert_eq!(error.to_string(), "Cache unavailable: connection refused");
    }

    #[test]
    fn test_timeout_display() {
        let error = CacheError::Timeout(Duration::from_millis(250));
        assert_eq!(error.to_string(), "Cache operation timed out after 250ms");
    }

    #[test]
    fn test_operation_failed_display() {
        let error = CacheError::OperationFailed("WRONGTYPE".to_string());
        assert_eq!(error.to_string(), "Cache operation failed: WRONGTYPE");
    }

    #[test]
    fn test_corrupted_display() {
        let error = CacheError::Corrupted {
            key: "wish::1::2".to_string(),
            reason: "expected value".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Corrupted cache entry at wish::1::2: expected value"
        );
    }
}
