use crate::api;
use crate::tests::support::test_state;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = api::create_router(test_state());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_endpoint() {
    let app = api::create_router(test_state());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/nonexistent")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_method_not_allowed() {
    let app = api::create_router(test_state());

    // Try POST on a GET-only endpoint
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_registered_embed_requires_dashboard_id() {
    let app = api::create_router(test_state());

    let response = app
        .oneshot(post_json("/api/embed/registered", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(
        body.get("error").and_then(|v| v.as_str()),
        Some("dashboardId is required")
    );
}

#[tokio::test]
async fn test_anonymous_embed_requires_dashboard_id() {
    let app = api::create_router(test_state());

    let response = app
        .oneshot(post_json("/api/embed/anonymous", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(
        body.get("error").and_then(|v| v.as_str()),
        Some("dashboardId is required")
    );
}

#[tokio::test]
async fn test_anonymous_embed_rejects_blank_dashboard_id() {
    let app = api::create_router(test_state());

    let response = app
        .oneshot(post_json("/api/embed/anonymous", json!({"dashboardId": "   "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_visual_embed_requires_all_identifiers() {
    let app = api::create_router(test_state());

    let response = app
        .oneshot(post_json(
            "/api/embed/visual",
            json!({"dashboardId": "sales-dashboard"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(
        body.get("error").and_then(|v| v.as_str()),
        Some("dashboardId, sheetId, visualId are required")
    );
}

#[tokio::test]
async fn test_visual_embed_missing_visual_id_rejected_identically() {
    let app = api::create_router(test_state());

    let response = app
        .oneshot(post_json(
            "/api/embed/visual",
            json!({"dashboardId": "sales-dashboard", "sheetId": "sheet-1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(
        body.get("error").and_then(|v| v.as_str()),
        Some("dashboardId, sheetId, visualId are required")
    );
}

#[tokio::test]
async fn test_visual_embed_missing_dashboard_id_rejected_identically() {
    let app = api::create_router(test_state());

    let response = app
        .oneshot(post_json(
            "/api/embed/visual",
            json!({"sheetId": "sheet-1", "visualId": "visual-1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(
        body.get("error").and_then(|v| v.as_str()),
        Some("dashboardId, sheetId, visualId are required")
    );
}

#[tokio::test]
async fn test_dashboard_route_without_id_is_not_found() {
    let app = api::create_router(test_state());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/dashboard")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
