use std::time::Duration;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::healthz,
        owner::OWNER_HEADER,
        wishes::{
            complete_wish, completed_wishes, create_wish, delete_wish, get_wish, list_user_wishes,
            list_wishes, pending_wishes, search_wishes, update_wish, wishes_by_category,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(OWNER_HEADER)]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/wishes", get(list_wishes).post(create_wish))
        .route("/wishes/completed", get(completed_wishes))
        .route("/wishes/pending", get(pending_wishes))
        .route("/wishes/search", get(search_wishes))
        .route("/wishes/category/{category}", get(wishes_by_category))
        .route(
            "/wishes/{id}",
            get(get_wish).put(update_wish).delete(delete_wish),
        )
        .route("/wishes/{id}/complete", patch(complete_wish))
        .route("/users/{owner_id}/wishes", get(list_user_wishes))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(all(test, feature = "memory"))]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn owner() -> Uuid {
        Uuid::from_u128(42)
    }

    fn request(method: &str, uri: &str, owner: Uuid, body: Option<serde_json::Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(OWNER_HEADER, owner.to_string());
        match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn create(app: &Router, title: &str) -> serde_json::Value {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/wishes",
                owner(),
                Some(serde_json::json!({ "title": title, "category": "travel" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        json(response).await
    }

    #[tokio::test]
    async fn test_healthz() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_missing_owner_is_unauthorized() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/wishes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(request("GET", "/api/wishes", owner(), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = json(response).await;
        assert_eq!(page["wishes"].as_array().unwrap().len(), 0);
        assert_eq!(page["total_items"], 0);
        assert_eq!(page["total_pages"], 0);
    }

    #[tokio::test]
    async fn test_wish_lifecycle() {
        let app = create_app(AppState::default());
        for title in ["A", "B", "C"] {
            create(&app, title).await;
        }

        let response = app
            .clone()
            .oneshot(request("GET", "/api/wishes?page=0&size=2", owner(), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let page = json(response).await;
        let titles: Vec<&str> = page["wishes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["C", "B"]);
        assert_eq!(page["total_items"], 3);
        assert_eq!(page["total_pages"], 2);

        let b_id = page["wishes"][1]["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(request(
                "PATCH",
                &format!("/api/wishes/{b_id}/complete"),
                owner(),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await["completed"], true);

        let response = app
            .clone()
            .oneshot(request("GET", "/api/wishes/completed", owner(), None))
            .await
            .unwrap();
        let completed = json(response).await;
        assert_eq!(completed.as_array().unwrap().len(), 1);
        assert_eq!(completed[0]["id"], b_id.as_str());

        let response = app
            .clone()
            .oneshot(request("GET", "/api/wishes/pending", owner(), None))
            .await
            .unwrap();
        assert_eq!(json(response).await.as_array().unwrap().len(), 2);

        let response = app
            .clone()
            .oneshot(request(
                "PUT",
                &format!("/api/wishes/{b_id}"),
                owner(),
                Some(serde_json::json!({ "title": "B2", "category": "books" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = json(response).await;
        assert_eq!(updated["title"], "B2");
        assert_eq!(updated["completed"], true);

        let response = app
            .clone()
            .oneshot(request("GET", "/api/wishes/category/books", owner(), None))
            .await
            .unwrap();
        assert_eq!(json(response).await.as_array().unwrap().len(), 1);

        let response = app
            .clone()
            .oneshot(request(
                "DELETE",
                &format!("/api/wishes/{b_id}"),
                owner(),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(request("GET", &format!("/api/wishes/{b_id}"), owner(), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(request("GET", "/api/wishes", owner(), None))
            .await
            .unwrap();
        assert_eq!(json(response).await["total_items"], 2);
    }

    #[tokio::test]
    async fn test_wish_of_other_owner_is_not_found() {
        let app = create_app(AppState::default());
        let wish = create(&app, "Private").await;
        let id = wish["id"].as_str().unwrap();

        let response = app
            .oneshot(request(
                "GET",
                &format!("/api/wishes/{id}"),
                Uuid::from_u128(7),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_user_wishes_checks_ownership() {
        let app = create_app(AppState::default());
        create(&app, "Mine").await;

        let response = app
            .clone()
            .oneshot(request(
                "GET",
                &format!("/api/users/{}/wishes", owner()),
                Uuid::from_u128(7),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app
            .oneshot(request(
                "GET",
                &format!("/api/users/{}/wishes", owner()),
                owner(),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await["total_items"], 1);
    }

    #[tokio::test]
    async fn test_invalid_requests() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/wishes",
                owner(),
                Some(serde_json::json!({ "title": "   " })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(request("GET", "/api/wishes?size=0", owner(), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(request("GET", "/api/wishes?sort_by=colour", owner(), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search() {
        let app = create_app(AppState::default());
        create(&app, "Visit Lisbon").await;
        create(&app, "Read Dune").await;

        let response = app
            .oneshot(request("GET", "/api/wishes/search?term=lisbon", owner(), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let found = json(response).await;
        assert_eq!(found.as_array().unwrap().len(), 1);
        assert_eq!(found[0]["title"], "Visit Lisbon");
    }
}
