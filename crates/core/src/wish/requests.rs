//! API request types for wish operations.
//!
//! Pure data types with validation; no I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::deserialize_optional_string;

use super::error::WishError;
use super::types::{SortDirection, SortField, SortSpec, Wish};

const MAX_TITLE_LEN: usize = 255;
const MAX_DESCRIPTION_LEN: usize = 1000;
const DEFAULT_PAGE_SIZE: u64 = 10;

fn validate_fields(title: &str, description: Option<&str>) -> Result<(), WishError> {
    if title.trim().is_empty() {
        return Err(WishError::InvalidRequest("Title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(WishError::InvalidRequest(format!(
            "Title must be less than {MAX_TITLE_LEN} characters"
        )));
    }
    if description.is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_LEN) {
        return Err(WishError::InvalidRequest(format!(
            "Description must be less than {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

/// Request payload for creating a new wish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWishRequest {
    pub title: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl CreateWishRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            category: None,
            due_date: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<(), WishError> {
        validate_fields(&self.title, self.description.as_deref())
    }

    /// Builds an incomplete wish for the given owner.
    pub fn into_wish(self, owner_id: Uuid) -> Wish {
        let mut wish = Wish::new(owner_id, self.title);
        wish.description = self.description;
        wish.priority = self.priority;
        wish.category = self.category;
        wish.due_date = self.due_date;
        wish
    }
}

/// Request payload for updating a wish.
///
/// Replaces every editable field. Completion state is not editable here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWishRequest {
    pub title: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl UpdateWishRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            category: None,
            due_date: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn validate(&self) -> Result<(), WishError> {
        validate_fields(&self.title, self.description.as_deref())
    }

    /// Applies the update to an existing wish.
    pub fn apply_to(self, wish: &mut Wish) {
        wish.title = self.title;
        wish.description = self.description;
        wish.priority = self.priority;
        wish.category = self.category;
        wish.due_date = self.due_date;
    }
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_sort_by() -> String {
    SortField::CreatedAt.as_str().to_string()
}

fn default_direction() -> String {
    SortDirection::Desc.as_str().to_string()
}

/// Query parameters for listing wishes a page at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListWishesQuery {
    /// Zero-based page number.
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub size: u64,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_direction")]
    pub direction: String,
}

impl Default for ListWishesQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: default_sort_by(),
            direction: default_direction(),
        }
    }
}

impl ListWishesQuery {
    pub fn sort(&self) -> Result<SortSpec, WishError> {
        let field = self
            .sort_by
            .parse::<SortField>()
            .map_err(WishError::InvalidRequest)?;
        Ok(SortSpec::new(
            field,
            SortDirection::parse_lenient(&self.direction),
        ))
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    pub fn validate(&self) -> Result<SortSpec, WishError> {
        if self.size == 0 {
            return Err(WishError::InvalidRequest(
                "Page size must be at least 1".to_string(),
            ));
        }
        self.sort()
    }
}

/// Query parameters for free-text search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: String,
}
