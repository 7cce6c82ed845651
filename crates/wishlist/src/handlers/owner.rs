//! Axum extractor for the calling owner.
//!
//! Authentication happens upstream; the identity layer forwards the
//! authenticated user's id in the `x-owner-id` header.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

pub const OWNER_HEADER: &str = "x-owner-id";

/// The authenticated owner making the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentOwner(pub Uuid);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OwnerRejection {
    #[error("Missing x-owner-id header")]
    Missing,
    #[error("Invalid x-owner-id header")]
    Invalid,
}

impl IntoResponse for OwnerRejection {
    fn into_response(self) -> Response {
        tracing::debug!(reason = %self, "Rejected request without owner");
        (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
    }
}

fn extract_owner_id(headers: &HeaderMap) -> Result<Uuid, OwnerRejection> {
    let value = headers.get(OWNER_HEADER).ok_or(OwnerRejection::Missing)?;
    value
        .to_str()
        .ok()
        .and_then(|s| Uuid::parse_str(s.trim()).ok())
        .ok_or(OwnerRejection::Invalid)
}

impl<S> FromRequestParts<S> for CurrentOwner
where
    S: Send + Sync,
{
    type Rejection = OwnerRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_owner_id(&parts.headers).map(CurrentOwner)
    }
}
