// ABOUTME: Serializable projections of QuickSight dashboard metadata
// ABOUTME: The SDK types carry no Serialize impls, so describe results map into these

use aws_sdk_quicksight::primitives::DateTime as AwsDateTime;
use aws_sdk_quicksight::types::{Dashboard, DashboardError, DashboardVersion, Sheet};
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

/// Result of a describe-dashboard call: the metadata (when the vendor
/// returned any) plus the vendor's response status.
#[derive(Debug, Clone)]
pub struct DashboardDescription {
    pub dashboard: Option<DashboardSummary>,
    pub status: i32,
}

/// Dashboard metadata as returned by the vendor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub dashboard_id: Option<String>,
    pub arn: Option<String>,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<DashboardVersionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_published_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<DateTime<Utc>>,
}

/// Published-version metadata, including the sheets a visual embed targets.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardVersionSummary {
    pub version_number: Option<i64>,
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_entity_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data_set_arns: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<DashboardErrorSummary>,
    pub sheets: Vec<SheetSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardErrorSummary {
    pub error_type: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetSummary {
    pub sheet_id: Option<String>,
    pub name: Option<String>,
}

impl From<&Dashboard> for DashboardSummary {
    fn from(dashboard: &Dashboard) -> Self {
        DashboardSummary {
            dashboard_id: dashboard.dashboard_id().map(str::to_string),
            arn: dashboard.arn().map(str::to_string),
            name: dashboard.name().map(str::to_string),
            version: dashboard.version().map(DashboardVersionSummary::from),
            created_time: dashboard.created_time().and_then(to_chrono),
            last_published_time: dashboard.last_published_time().and_then(to_chrono),
            last_updated_time: dashboard.last_updated_time().and_then(to_chrono),
        }
    }
}

impl From<&DashboardVersion> for DashboardVersionSummary {
    fn from(version: &DashboardVersion) -> Self {
        DashboardVersionSummary {
            version_number: version.version_number(),
            status: version.status().map(|s| s.as_str().to_string()),
            arn: version.arn().map(str::to_string),
            source_entity_arn: version.source_entity_arn().map(str::to_string),
            theme_arn: version.theme_arn().map(str::to_string),
            description: version.description().map(str::to_string),
            data_set_arns: version.data_set_arns().to_vec(),
            errors: version.errors().iter().map(DashboardErrorSummary::from).collect(),
            sheets: version.sheets().iter().map(SheetSummary::from).collect(),
        }
    }
}

impl From<&DashboardError> for DashboardErrorSummary {
    fn from(error: &DashboardError) -> Self {
        DashboardErrorSummary {
            error_type: error.r#type().map(|t| t.as_str().to_string()),
            message: error.message().map(str::to_string),
        }
    }
}

impl From<&Sheet> for SheetSummary {
    fn from(sheet: &Sheet) -> Self {
        SheetSummary {
            sheet_id: sheet.sheet_id().map(str::to_string),
            name: sheet.name().map(str::to_string),
        }
    }
}

fn to_chrono(value: &AwsDateTime) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(value.secs(), value.subsec_nanos()).single()
}
