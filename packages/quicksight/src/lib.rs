// ABOUTME: AWS QuickSight embedding client for Sightline
// ABOUTME: Wraps embed-URL generation and dashboard description behind typed errors

pub mod client;
pub mod dashboard;
pub mod error;
pub mod settings;

pub use client::{EmbedClient, EmbedUrl, VisualTarget, SESSION_LIFETIME_MINUTES};
pub use dashboard::{DashboardDescription, DashboardSummary, DashboardVersionSummary, SheetSummary};
pub use error::{QuickSightError, QuickSightResult};
pub use settings::{QuickSightSettings, SettingsError};
