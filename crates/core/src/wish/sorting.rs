use std::cmp::Ordering;

use super::types::{SortDirection, SortField, SortSpec, Wish};

/// Compares two wishes on a single field, ascending.
///
/// Absent optional values compare lower than present ones.
fn compare_field(a: &Wish, b: &Wish, field: SortField) -> Ordering {
    match field {
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        SortField::Title => a.title.cmp(&b.title),
        SortField::Priority => a.priority.cmp(&b.priority),
        SortField::DueDate => a.due_date.cmp(&b.due_date),
        SortField::CompletedAt => a.completed_at.cmp(&b.completed_at),
    }
}

/// Compares two wishes according to a sort spec.
///
/// Ties are broken by id in the same direction so the ordering is total
/// and every rebuild of the same data yields the same list.
pub fn compare_wishes(a: &Wish, b: &Wish, sort: SortSpec) -> Ordering {
    let ordering = compare_field(a, b, sort.field).then_with(|| a.id.cmp(&b.id));
    match sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Sorts wishes in place according to the given sort spec.
pub fn sort_wishes(wishes: &mut [Wish], sort: SortSpec) {
    wishes.sort_by(|a, b| compare_wishes(a, b, sort));
}
