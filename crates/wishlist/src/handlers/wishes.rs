//! Wish handlers.
//!
//! Thin adapters from HTTP to [`crate::service::WishlistService`]. Every
//! route is scoped to the [`CurrentOwner`].

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use wishlist_core::wish::{
    CreateWishRequest, ListWishesQuery, SearchQuery, UpdateWishRequest, Wish, WishPage,
};

use crate::{
    handlers::{AppError, CurrentOwner},
    state::AppState,
};

/// GET /api/wishes
pub async fn list_wishes(
    CurrentOwner(owner_id): CurrentOwner,
    State(state): State<AppState>,
    Query(query): Query<ListWishesQuery>,
) -> Result<Json<WishPage>, AppError> {
    Ok(Json(state.wishlist.list_wishes(owner_id, &query).await?))
}

/// GET /api/users/{owner_id}/wishes
pub async fn list_user_wishes(
    CurrentOwner(caller_id): CurrentOwner,
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
    Query(query): Query<ListWishesQuery>,
) -> Result<Json<WishPage>, AppError> {
    let page = state
        .wishlist
        .list_user_wishes(caller_id, owner_id, &query)
        .await?;
    Ok(Json(page))
}

/// POST /api/wishes
pub async fn create_wish(
    CurrentOwner(owner_id): CurrentOwner,
    State(state): State<AppState>,
    Json(request): Json<CreateWishRequest>,
) -> Result<(StatusCode, Json<Wish>), AppError> {
    let wish = state.wishlist.create_wish(owner_id, request).await?;
    Ok((StatusCode::CREATED, Json(wish)))
}

/// GET /api/wishes/{id}
pub async fn get_wish(
    CurrentOwner(owner_id): CurrentOwner,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Wish>, AppError> {
    Ok(Json(state.wishlist.get_wish(owner_id, id).await?))
}

/// PUT /api/wishes/{id}
pub async fn update_wish(
    CurrentOwner(owner_id): CurrentOwner,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateWishRequest>,
) -> Result<Json<Wish>, AppError> {
    Ok(Json(state.wishlist.update_wish(owner_id, id, request).await?))
}

/// DELETE /api/wishes/{id}
pub async fn delete_wish(
    CurrentOwner(owner_id): CurrentOwner,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.wishlist.delete_wish(owner_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/wishes/{id}/complete
pub async fn complete_wish(
    CurrentOwner(owner_id): CurrentOwner,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Wish>, AppError> {
    Ok(Json(state.wishlist.complete_wish(owner_id, id).await?))
}

/// GET /api/wishes/completed
pub async fn completed_wishes(
    CurrentOwner(owner_id): CurrentOwner,
    State(state): State<AppState>,
) -> Result<Json<Vec<Wish>>, AppError> {
    Ok(Json(state.wishlist.completed_wishes(owner_id).await?))
}

/// GET /api/wishes/pending
pub async fn pending_wishes(
    CurrentOwner(owner_id): CurrentOwner,
    State(state): State<AppState>,
) -> Result<Json<Vec<Wish>>, AppError> {
    Ok(Json(state.wishlist.pending_wishes(owner_id).await?))
}

/// GET /api/wishes/category/{category}
pub async fn wishes_by_category(
    CurrentOwner(owner_id): CurrentOwner,
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Wish>>, AppError> {
    Ok(Json(
        state
            .wishlist
            .wishes_by_category(owner_id, &category)
            .await?,
    ))
}

/// GET /api/wishes/search?term=
pub async fn search_wishes(
    CurrentOwner(owner_id): CurrentOwner,
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Wish>>, AppError> {
    Ok(Json(
        state.wishlist.search_wishes(owner_id, &query.term).await?,
    ))
}
