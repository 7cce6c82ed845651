mod error;
mod paging;
mod requests;
mod sorting;
mod types;

pub use error::{wish_error_to_status_code, Result, WishError};
pub use paging::{page_bounds, slice_page, total_pages};
pub use requests::{CreateWishRequest, ListWishesQuery, SearchQuery, UpdateWishRequest};
pub use sorting::{compare_wishes, sort_wishes};
pub use types::{SortDirection, SortField, SortSpec, Wish, WishPage};
