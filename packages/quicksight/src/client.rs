use aws_config::{BehaviorVersion, Region};
use aws_sdk_quicksight::types::{
    AnonymousUserDashboardEmbeddingConfiguration, AnonymousUserEmbeddingExperienceConfiguration,
    DashboardVisualId, RegisteredUserDashboardEmbeddingConfiguration,
    RegisteredUserDashboardVisualEmbeddingConfiguration,
    RegisteredUserEmbeddingExperienceConfiguration,
};
use aws_sdk_quicksight::Client;

use crate::dashboard::{DashboardDescription, DashboardSummary};
use crate::error::{QuickSightError, QuickSightResult};
use crate::settings::QuickSightSettings;

/// Session lifetime passed to every embed-URL generation call, in minutes.
pub const SESSION_LIFETIME_MINUTES: i64 = 600;

/// A signed embed URL together with the vendor's response status.
#[derive(Debug, Clone)]
pub struct EmbedUrl {
    pub url: String,
    pub status: i32,
}

/// Identifies a single visual within a dashboard sheet.
#[derive(Debug, Clone)]
pub struct VisualTarget {
    pub dashboard_id: String,
    pub sheet_id: String,
    pub visual_id: String,
}

/// QuickSight embedding client
#[derive(Debug, Clone)]
pub struct EmbedClient {
    client: Client,
    settings: QuickSightSettings,
}

impl EmbedClient {
    /// Create a client using the SDK default credential chain.
    pub async fn from_env(settings: QuickSightSettings) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .load()
            .await;

        Self {
            client: Client::new(&config),
            settings,
        }
    }

    /// Wrap an existing SDK client.
    pub fn new(client: Client, settings: QuickSightSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &QuickSightSettings {
        &self.settings
    }

    /// ARN of a dashboard in the configured account. Anonymous sessions are
    /// authorized for exactly this resource and nothing else.
    pub fn dashboard_arn(&self, dashboard_id: &str) -> String {
        format!(
            "arn:aws:quicksight:{}:{}:dashboard/{}",
            self.settings.region, self.settings.account_id, dashboard_id
        )
    }

    /// Resolve the caller identity for registered-user calls: an explicit ARN
    /// wins, otherwise the configured default principal.
    fn registered_user_arn(&self, user_arn: Option<&str>) -> QuickSightResult<String> {
        user_arn
            .map(str::to_string)
            .or_else(|| self.settings.default_user_arn.clone())
            .ok_or_else(|| {
                QuickSightError::Configuration(
                    "No user ARN provided and QUICKSIGHT_USER_ARN is not set".to_string(),
                )
            })
    }

    /// Generate an embed URL for a registered user viewing a full dashboard.
    pub async fn registered_dashboard_url(
        &self,
        dashboard_id: &str,
        user_arn: Option<&str>,
    ) -> QuickSightResult<EmbedUrl> {
        let user_arn = self.registered_user_arn(user_arn)?;

        let experience = RegisteredUserEmbeddingExperienceConfiguration::builder()
            .dashboard(
                RegisteredUserDashboardEmbeddingConfiguration::builder()
                    .initial_dashboard_id(dashboard_id)
                    .build()?,
            )
            .build();

        let response = self
            .client
            .generate_embed_url_for_registered_user()
            .aws_account_id(&self.settings.account_id)
            .user_arn(user_arn)
            .session_lifetime_in_minutes(SESSION_LIFETIME_MINUTES)
            .experience_configuration(experience)
            .send()
            .await
            .map_err(QuickSightError::from_sdk)?;

        Ok(EmbedUrl {
            url: response.embed_url().to_string(),
            status: response.status(),
        })
    }

    /// Generate an embed URL for an anonymous session, scoped to the one
    /// requested dashboard.
    pub async fn anonymous_dashboard_url(&self, dashboard_id: &str) -> QuickSightResult<EmbedUrl> {
        let experience = AnonymousUserEmbeddingExperienceConfiguration::builder()
            .dashboard(
                AnonymousUserDashboardEmbeddingConfiguration::builder()
                    .initial_dashboard_id(dashboard_id)
                    .build()?,
            )
            .build();

        let response = self
            .client
            .generate_embed_url_for_anonymous_user()
            .aws_account_id(&self.settings.account_id)
            .namespace(&self.settings.namespace)
            .session_lifetime_in_minutes(SESSION_LIFETIME_MINUTES)
            .authorized_resource_arns(self.dashboard_arn(dashboard_id))
            .experience_configuration(experience)
            .send()
            .await
            .map_err(QuickSightError::from_sdk)?;

        Ok(EmbedUrl {
            url: response.embed_url().to_string(),
            status: response.status(),
        })
    }

    /// Generate an embed URL for a registered user viewing a single visual.
    pub async fn registered_visual_url(
        &self,
        target: &VisualTarget,
        user_arn: Option<&str>,
    ) -> QuickSightResult<EmbedUrl> {
        let user_arn = self.registered_user_arn(user_arn)?;

        let visual = DashboardVisualId::builder()
            .dashboard_id(&target.dashboard_id)
            .sheet_id(&target.sheet_id)
            .visual_id(&target.visual_id)
            .build()?;

        let experience = RegisteredUserEmbeddingExperienceConfiguration::builder()
            .dashboard_visual(
                RegisteredUserDashboardVisualEmbeddingConfiguration::builder()
                    .initial_dashboard_visual_id(visual)
                    .build(),
            )
            .build();

        let response = self
            .client
            .generate_embed_url_for_registered_user()
            .aws_account_id(&self.settings.account_id)
            .user_arn(user_arn)
            .session_lifetime_in_minutes(SESSION_LIFETIME_MINUTES)
            .experience_configuration(experience)
            .send()
            .await
            .map_err(QuickSightError::from_sdk)?;

        Ok(EmbedUrl {
            url: response.embed_url().to_string(),
            status: response.status(),
        })
    }

    /// Fetch dashboard metadata, live from the vendor on every call.
    pub async fn describe_dashboard(
        &self,
        dashboard_id: &str,
    ) -> QuickSightResult<DashboardDescription> {
        let response = self
            .client
            .describe_dashboard()
            .aws_account_id(&self.settings.account_id)
            .dashboard_id(dashboard_id)
            .send()
            .await
            .map_err(QuickSightError::from_sdk)?;

        Ok(DashboardDescription {
            dashboard: response.dashboard().map(DashboardSummary::from),
            status: response.status(),
        })
    }
}
