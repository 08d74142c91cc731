// ABOUTME: HTTP request handlers for dashboard metadata lookups

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use sightline_quicksight::DashboardSummary;

use crate::error::{ApiError, ApiResult};
use crate::ApiState;

/// Dashboard metadata returned to the frontend
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub dashboard: Option<DashboardSummary>,
    pub status: i32,
}

/// Describe a dashboard by ID
pub async fn describe_dashboard(
    State(state): State<ApiState>,
    Path(dashboard_id): Path<String>,
) -> ApiResult<Json<DashboardResponse>> {
    info!("Describing dashboard {}", dashboard_id);

    let description = state
        .quicksight
        .describe_dashboard(&dashboard_id)
        .await
        .map_err(|e| ApiError::provider("Failed to get dashboard info", e))?;

    Ok(Json(DashboardResponse {
        dashboard: description.dashboard,
        status: description.status,
    }))
}
