use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use wishlist_core::storage::{repository_error_to_status_code, RepositoryError};
use wishlist_core::wish::{wish_error_to_status_code, WishError};

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = if let Some(wish_error) = self.0.downcast_ref::<WishError>() {
            Some(wish_error_to_status_code(wish_error))
        } else {
            self.0
                .downcast_ref::<RepositoryError>()
                .map(repository_error_to_status_code)
        };
        let status_code = code
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
