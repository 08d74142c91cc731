// ABOUTME: HTTP API layer for Sightline providing REST endpoints and routing
// ABOUTME: Integration layer between the HTTP surface and the QuickSight client

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use sightline_quicksight::EmbedClient;

pub mod dashboard_handlers;
pub mod embed_handlers;
pub mod error;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct ApiState {
    pub quicksight: Arc<EmbedClient>,
}

impl ApiState {
    pub fn new(quicksight: EmbedClient) -> Self {
        Self {
            quicksight: Arc::new(quicksight),
        }
    }
}

/// Creates the embed API router
pub fn create_embed_router() -> Router<ApiState> {
    Router::new()
        .route(
            "/registered",
            post(embed_handlers::generate_registered_embed),
        )
        .route("/anonymous", post(embed_handlers::generate_anonymous_embed))
        .route("/visual", post(embed_handlers::generate_visual_embed))
}

/// Creates the dashboard API router
pub fn create_dashboard_router() -> Router<ApiState> {
    Router::new().route(
        "/{dashboard_id}",
        get(dashboard_handlers::describe_dashboard),
    )
}
