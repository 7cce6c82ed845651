//! Redis error mapping to CacheError.

use wishlist_core::cache::CacheError;

/// Maps Redis errors to CacheError.
pub fn map_redis_error(err: redis::RedisError) -> CacheError {
    if err.is_connection_refusal() || err.is_timeout() || err.is_connection_dropped() {
        CacheError::Unavailable(err.to_string())
    } else if err.kind() == redis::ErrorKind::TypeError {
        CacheError::Corrupted {
            key: String::new(),
            reason: err.to_string(),
        }
    } else {
        CacheError::OperationFailed(err.to_string())
    }
}
