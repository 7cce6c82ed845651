mod error;
mod invalidation;
mod keys;
mod patterns;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use invalidation::{stale_views, Mutation, StaleView};
pub use keys::{
    build_key, category_wishes_key, category_wishes_pattern, completed_wishes_key,
    extract_owner_id_from_key, namespace_pattern, pending_wishes_key, sort_discriminator,
    user_wishes_key, user_wishes_pattern, wish_key, Namespace,
};
pub use patterns::pattern_matches;
pub use serialization::{
    deserialize_wish, deserialize_wish_elements, deserialize_wishes, serialize_wish,
    serialize_wish_elements, serialize_wishes, SerializationError,
};
pub use traits::ViewStore;
