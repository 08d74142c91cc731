// ABOUTME: HTTP request handlers for embed-URL generation
// ABOUTME: Validates identifiers locally, then forwards to the QuickSight client

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use sightline_quicksight::{EmbedUrl, VisualTarget};

use crate::error::{ApiError, ApiResult};
use crate::ApiState;

/// Request body for dashboard embed operations
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedRequest {
    pub dashboard_id: Option<String>,
    pub user_arn: Option<String>,
}

/// Request body for visual embed operations
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualEmbedRequest {
    pub dashboard_id: Option<String>,
    pub sheet_id: Option<String>,
    pub visual_id: Option<String>,
    pub user_arn: Option<String>,
}

/// Signed embed URL returned to the frontend
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedUrlResponse {
    pub embed_url: String,
    pub status: i32,
}

impl From<EmbedUrl> for EmbedUrlResponse {
    fn from(embed: EmbedUrl) -> Self {
        EmbedUrlResponse {
            embed_url: embed.url,
            status: embed.status,
        }
    }
}

/// The trimmed value when the field is present and non-blank.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn require_dashboard_id(value: &Option<String>) -> ApiResult<&str> {
    present(value).ok_or_else(|| ApiError::validation("dashboardId is required"))
}

/// Generate an embed URL for a registered QuickSight user
pub async fn generate_registered_embed(
    State(state): State<ApiState>,
    Json(request): Json<EmbedRequest>,
) -> ApiResult<Json<EmbedUrlResponse>> {
    let dashboard_id = require_dashboard_id(&request.dashboard_id)?;
    info!("Generating registered embed URL for dashboard {}", dashboard_id);

    let embed = state
        .quicksight
        .registered_dashboard_url(dashboard_id, present(&request.user_arn))
        .await
        .map_err(|e| ApiError::provider("Failed to generate embed URL", e))?;

    Ok(Json(embed.into()))
}

/// Generate an embed URL for an anonymous session (public embedding)
pub async fn generate_anonymous_embed(
    State(state): State<ApiState>,
    Json(request): Json<EmbedRequest>,
) -> ApiResult<Json<EmbedUrlResponse>> {
    let dashboard_id = require_dashboard_id(&request.dashboard_id)?;
    info!("Generating anonymous embed URL for dashboard {}", dashboard_id);

    let embed = state
        .quicksight
        .anonymous_dashboard_url(dashboard_id)
        .await
        .map_err(|e| ApiError::provider("Failed to generate embed URL", e))?;

    Ok(Json(embed.into()))
}

/// Generate an embed URL for a single visual within a dashboard sheet
pub async fn generate_visual_embed(
    State(state): State<ApiState>,
    Json(request): Json<VisualEmbedRequest>,
) -> ApiResult<Json<EmbedUrlResponse>> {
    // The three identifiers are validated as a group and rejected with one message.
    let target = match (
        present(&request.dashboard_id),
        present(&request.sheet_id),
        present(&request.visual_id),
    ) {
        (Some(dashboard_id), Some(sheet_id), Some(visual_id)) => VisualTarget {
            dashboard_id: dashboard_id.to_string(),
            sheet_id: sheet_id.to_string(),
            visual_id: visual_id.to_string(),
        },
        _ => {
            return Err(ApiError::validation(
                "dashboardId, sheetId, visualId are required",
            ))
        }
    };

    info!(
        "Generating visual embed URL for dashboard {} visual {}",
        target.dashboard_id, target.visual_id
    );

    let embed = state
        .quicksight
        .registered_visual_url(&target, present(&request.user_arn))
        .await
        .map_err(|e| ApiError::provider("Failed to generate embed URL for visual", e))?;

    Ok(Json(embed.into()))
}
