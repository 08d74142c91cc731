use axum::{routing::get, Router};

use sightline_api::{create_dashboard_router, create_embed_router, ApiState};

pub mod health;

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .nest("/api/embed", create_embed_router())
        .nest("/api/dashboard", create_dashboard_router())
        .with_state(state)
}
