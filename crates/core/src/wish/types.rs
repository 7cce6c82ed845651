use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single wishlist item, owned exclusively by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wish {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    /// Set iff `completed` is true.
    pub completed_at: Option<DateTime<Utc>>,
    pub priority: Option<i32>,
    /// Free-text label used by the category view.
    pub category: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Wish {
    /// Creates a new, incomplete wish for the given owner.
    ///
    /// Timestamps are provisional; the store overwrites them on save.
    pub fn new(owner_id: Uuid, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title: title.into(),
            description: None,
            completed: false,
            completed_at: None,
            priority: None,
            category: None,
            due_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets a specific ID for this wish (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Marks the wish as completed at the given instant.
    pub fn mark_completed(&mut self, at: DateTime<Utc>) {
        self.completed = true;
        self.completed_at = Some(at);
    }

    /// Returns true if the wish belongs to the given category label.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }

    /// Case-insensitive substring match over title and description.
    pub fn matches_term(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

/// Field a wish list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
    Priority,
    DueDate,
    CompletedAt,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
            SortField::Title => "title",
            SortField::Priority => "priority",
            SortField::DueDate => "due_date",
            SortField::CompletedAt => "completed_at",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    /// Accepts both `snake_case` and `camelCase` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" | "createdAt" => Ok(SortField::CreatedAt),
            "updated_at" | "updatedAt" => Ok(SortField::UpdatedAt),
            "title" => Ok(SortField::Title),
            "priority" => Ok(SortField::Priority),
            "due_date" | "dueDate" => Ok(SortField::DueDate),
            "completed_at" | "completedAt" => Ok(SortField::CompletedAt),
            other => Err(format!("unknown sort field: {other}")),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Parses a direction leniently: `asc` in any case is ascending,
    /// everything else is descending.
    pub fn parse_lenient(s: &str) -> Self {
        if s.eq_ignore_ascii_case("asc") {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ordering of a wish list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn asc(field: SortField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: SortField) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Picks the ordering that keys the pagination view.
    ///
    /// Only the first requested ordering is significant. An empty request
    /// falls back to `created_at` descending.
    pub fn first_or_default(orders: &[SortSpec]) -> SortSpec {
        orders.first().copied().unwrap_or_default()
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}

/// A page of wishes plus the metadata needed to render paging controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishPage {
    pub wishes: Vec<Wish>,
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wish_is_pending() {
        let wish = Wish::new(Uuid::nil(), "Learn the cello");
        assert!(!wish.completed);
        assert!(wish.completed_at.is_none());
        assert_eq!(wish.owner_id, Uuid::nil());
    }

    #[test]
    fn test_mark_completed_sets_timestamp() {
        let mut wish = Wish::new(Uuid::nil(), "Visit Lisbon");
        let at = Utc::now();
        wish.mark_completed(at);
        assert!(wish.completed);
        assert_eq!(wish.completed_at, Some(at));
    }

    #[test]
    fn test_matches_term_is_case_insensitive() {
        let wish = Wish::new(Uuid::nil(), "Read Dune").with_description("The whole SAGA");
        assert!(wish.matches_term("dune"));
        assert!(wish.matches_term("saga"));
        assert!(!wish.matches_term("foundation"));
    }

    #[test]
    fn test_in_category() {
        let wish = Wish::new(Uuid::nil(), "Buy a kayak").with_category("outdoors");
        assert!(wish.in_category("outdoors"));
        assert!(!wish.in_category("Outdoors"));
        assert!(!Wish::new(Uuid::nil(), "No label").in_category("outdoors"));
    }

    #[test]
    fn test_sort_field_from_str_accepts_camel_case() {
        assert_eq!("createdAt".parse::<SortField>(), Ok(SortField::CreatedAt));
        assert_eq!("due_date".parse::<SortField>(), Ok(SortField::DueDate));
        assert!("owner".parse::<SortField>().is_err());
    }

    #[test]
    fn test_direction_parse_lenient() {
        assert_eq!(SortDirection::parse_lenient("ASC"), SortDirection::Asc);
        assert_eq!(SortDirection::parse_lenient("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::parse_lenient("sideways"), SortDirection::Desc);
    }

    #[test]
    fn test_first_or_default() {
        assert_eq!(
            SortSpec::first_or_default(&[]),
            SortSpec::desc(SortField::CreatedAt)
        );
        let orders = [
            SortSpec::asc(SortField::Priority),
            SortSpec::desc(SortField::Title),
        ];
        assert_eq!(
            SortSpec::first_or_default(&orders),
            SortSpec::asc(SortField::Priority)
        );
    }
}
