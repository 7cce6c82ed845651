//! JSON encoding of cached views.
//!
//! Values are stored as JSON so that entries stay human-readable when
//! inspected directly in the backing store.

use thiserror::Error;

use crate::wish::Wish;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a wish to JSON bytes.
pub fn serialize_wish(wish: &Wish) -> Result<Vec<u8>> {
    serde_json::to_vec(wish).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a wish.
pub fn deserialize_wish(bytes: &[u8]) -> Result<Wish> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a slice of wishes to a single JSON array.
pub fn serialize_wishes(wishes: &[Wish]) -> Result<Vec<u8>> {
    serde_json::to_vec(wishes).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes a JSON array to a vector of wishes.
pub fn deserialize_wishes(bytes: &[u8]) -> Result<Vec<Wish>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes each wish separately, one element per list slot.
///
/// Used for list-backed views where the store slices by index.
pub fn serialize_wish_elements(wishes: &[Wish]) -> Result<Vec<Vec<u8>>> {
    wishes.iter().map(serialize_wish).collect()
}

/// Deserializes list slots produced by [`serialize_wish_elements`].
///
/// Fails as a whole if any single element is malformed.
pub fn deserialize_wish_elements(elements: &[Vec<u8>]) -> Result<Vec<Wish>> {
    elements.iter().map(|e| deserialize_wish(e)).collect()
}
