//! Glob-style matching of cache keys, as used for bulk eviction.
//!
//! Only `*` is special: it matches any sequence of characters, including
//! the empty one. This is the subset of Redis `KEYS`/`SCAN MATCH` syntax
//! that the key builders emit.

/// Checks if a cache key matches a glob pattern.
///
/// # Examples
///
/// ```
/// use wishlist_core::cache::pattern_matches;
///
/// assert!(pattern_matches("pendingWishes::42", "pendingWishes::42"));
/// assert!(pattern_matches("userWishes::42::*", "userWishes::42::sort=title::asc"));
/// assert!(pattern_matches("*::42::*", "categoryWishes::42::books"));
/// assert!(!pattern_matches("userWishes::42::*", "userWishes::43::sort=title::asc"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let segments: Vec<&str> = pattern.split('*').collect();

    // No wildcard at all
    if segments.len() == 1 {
        return pattern == key;
    }

    let first = segments[0];
    let last = segments[segments.len() - 1];
    let middle = &segments[1..segments.len() - 1];

    let Some(mut remaining) = key.strip_prefix(first) else {
        return false;
    };

    for segment in middle.iter().filter(|s| !s.is_empty()) {
        match remaining.find(segment) {
            Some(pos) => remaining = &remaining[pos + segment.len()..],
            None => return false,
        }
    }

    remaining.len() >= last.len() && remaining.ends_with(last)
}
