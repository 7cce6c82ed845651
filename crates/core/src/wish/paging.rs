//! Pure helpers for reconstructing pages from a fully sorted list.

/// Returns the inclusive `(start, stop)` index range of a page.
///
/// Returns `None` when `size` is zero, since such a page selects nothing.
pub fn page_bounds(offset: u64, size: u64) -> Option<(u64, u64)> {
    if size == 0 {
        return None;
    }
    Some((offset, offset.saturating_add(size - 1)))
}

/// Number of pages needed to show `total` items, `size` per page.
pub fn total_pages(total: u64, size: u64) -> u64 {
    if size == 0 {
        return 0;
    }
    total.div_ceil(size)
}

/// Slices a page out of an in-memory list, clamping at the end.
pub fn slice_page<T: Clone>(items: &[T], offset: u64, size: u64) -> Vec<T> {
    let Ok(start) = usize::try_from(offset) else {
        return Vec::new();
    };
    if start >= items.len() || size == 0 {
        return Vec::new();
    }
    let len = usize::try_from(size).unwrap_or(usize::MAX);
    let end = start.saturating_add(len).min(items.len());
    items[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(0, 2), Some((0, 1)));
        assert_eq!(page_bounds(4, 2), Some((4, 5)));
        assert_eq!(page_bounds(3, 0), None);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(3, 2), 2);
        assert_eq!(total_pages(4, 2), 2);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_slice_page() {
        let items = vec!['C', 'B', 'A'];
        assert_eq!(slice_page(&items, 0, 2), vec!['C', 'B']);
        assert_eq!(slice_page(&items, 2, 2), vec!['A']);
        assert!(slice_page(&items, 3, 2).is_empty());
        assert!(slice_page(&items, 0, 0).is_empty());
    }

    #[test]
    fn test_slices_reconstruct_whole_list() {
        let items: Vec<u32> = (0..7).collect();
        let mut rebuilt = Vec::new();
        let mut offset = 0;
        while offset < items.len() as u64 {
            rebuilt.extend(slice_page(&items, offset, 3));
            offset += 3;
        }
        assert_eq!(rebuilt, items);
    }
}
